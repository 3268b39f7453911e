//! Minimal behavior tree: [Sequence] and [Selector] composites over [Leaf] actions and
//! conditions. The tree is static; every [evaluate](BehaviorNode::evaluate) walks it from the
//! root against a caller-provided context.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BehaviorStatus {
    Success,
    Failure,
    /// Not finished yet, evaluate again on the next tick.
    Running,
}

pub trait BehaviorNode<C> {
    fn evaluate(&mut self, ctx: &mut C) -> BehaviorStatus;
}

pub type BoxedNode<C> = Box<dyn BehaviorNode<C>>;

/// Runs children in order and succeeds only if all of them do. Stops at the first child that
/// fails or is still running and reports that status.
pub struct Sequence<C> {
    children: Vec<BoxedNode<C>>,
}

impl<C> Sequence<C> {
    pub fn new(children: Vec<BoxedNode<C>>) -> Sequence<C> {
        Sequence { children }
    }
}

impl<C> BehaviorNode<C> for Sequence<C> {
    fn evaluate(&mut self, ctx: &mut C) -> BehaviorStatus {
        for child in self.children.iter_mut() {
            match child.evaluate(ctx) {
                BehaviorStatus::Success => {}
                status => return status,
            }
        }
        BehaviorStatus::Success
    }
}

/// Runs children in order until one succeeds or is still running. Fails if every child fails.
pub struct Selector<C> {
    children: Vec<BoxedNode<C>>,
}

impl<C> Selector<C> {
    pub fn new(children: Vec<BoxedNode<C>>) -> Selector<C> {
        Selector { children }
    }
}

impl<C> BehaviorNode<C> for Selector<C> {
    fn evaluate(&mut self, ctx: &mut C) -> BehaviorStatus {
        for child in self.children.iter_mut() {
            match child.evaluate(ctx) {
                BehaviorStatus::Failure => {}
                status => return status,
            }
        }
        BehaviorStatus::Failure
    }
}

/// Wraps an action or condition closure.
pub struct Leaf<F> {
    action: F,
}

impl<F> Leaf<F> {
    pub fn new(action: F) -> Leaf<F> {
        Leaf { action }
    }
}

impl<C, F> BehaviorNode<C> for Leaf<F>
where
    F: FnMut(&mut C) -> BehaviorStatus,
{
    fn evaluate(&mut self, ctx: &mut C) -> BehaviorStatus {
        (self.action)(ctx)
    }
}

/// Boxes a closure as a leaf node.
pub fn leaf<C, F>(action: F) -> BoxedNode<C>
where
    F: FnMut(&mut C) -> BehaviorStatus + 'static,
{
    Box::new(Leaf::new(action))
}
