//! A* over the 4-connected grid described by a [GridOracle].
//!
//! All search bookkeeping lives in a search state that is created at the start of
//! [Pathfinder::find_path] and dropped when it returns, so concurrent searches over a shared
//! oracle only need a [Pathfinder] each.
use std::marker::PhantomData;

use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, info, trace, warn};
use smallvec::SmallVec;
use thiserror::Error;

use crate::grid::GridOracle;
use crate::priority_queue::{Frontier, PriorityQueue};
use crate::{NEUMANN_OFFSETS, N_NEIGHBOURS, STEP_COST};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Reasons a search did not run to a regular outcome. An unreachable goal is not an error,
/// see [Pathfinder::find_path].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("start {0:?} lies outside the grid")]
    StartOutOfBounds(Point),
    #[error("start {0:?} is not walkable")]
    StartBlocked(Point),
    #[error("goal {0:?} lies outside the grid")]
    GoalOutOfBounds(Point),
    #[error("goal {0:?} is not walkable")]
    GoalBlocked(Point),
    #[error("search was aborted after {steps} steps")]
    StepLimitExceeded { steps: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathfinderConfig {
    /// Maximum number of dequeues before the search is aborted. [None] searches until the
    /// frontier is exhausted. The budget is checked before every dequeue, so `Some(0)` forbids
    /// searching entirely and fails even when start equals goal.
    pub step_limit: Option<usize>,
}

impl PathfinderConfig {
    pub fn new() -> PathfinderConfig {
        PathfinderConfig::default()
    }
    pub fn with_step_limit(mut self, step_limit: usize) -> PathfinderConfig {
        self.step_limit = Some(step_limit);
        self
    }
}

/// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two points,
/// scaled by [STEP_COST]. Admissible and consistent on a uniform-cost 4-grid. Saturates at
/// [i32::MAX] for points further apart than that.
pub fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    let distance = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    i32::try_from(distance)
        .unwrap_or(i32::MAX)
        .saturating_mul(STEP_COST)
}

struct SearchState<Q> {
    came_from: FxHashMap<Point, Point>,
    g_score: FxIndexMap<Point, i32>,
    closed: FxHashSet<Point>,
    open: Q,
}

impl<Q: Frontier<Point>> SearchState<Q> {
    fn new() -> SearchState<Q> {
        SearchState {
            came_from: FxHashMap::default(),
            g_score: FxIndexMap::default(),
            closed: FxHashSet::default(),
            open: Q::default(),
        }
    }

    /// Records `tentative` as the cost of `node` if it improves on the known one. Returns
    /// whether the record changed.
    fn improve(&mut self, node: Point, parent: Point, tentative: i32) -> bool {
        match self.g_score.entry(node) {
            Vacant(e) => {
                e.insert(tentative);
            }
            Occupied(mut e) => {
                if *e.get() <= tentative {
                    return false;
                }
                e.insert(tentative);
            }
        }
        self.came_from.insert(node, parent);
        true
    }

    /// Follows the parent links back from `end`, which yields the path from the start.
    fn reconstruct_path(&self, end: Point) -> Vec<Point> {
        let mut path: Vec<Point> =
            std::iter::successors(Some(end), |p| self.came_from.get(p).copied()).collect();
        path.reverse();
        path
    }
}

/// Finds paths between a fixed start and goal on the grid of a [GridOracle]. The frontier type
/// `Q` decides how the open set is stored; it never changes which path is found.
pub struct Pathfinder<'a, G: ?Sized, Q = PriorityQueue<Point>> {
    grid: &'a G,
    start: Point,
    goal: Point,
    pub config: PathfinderConfig,
    search_count: usize,
    frontier: PhantomData<fn() -> Q>,
}

impl<'a, G: GridOracle + ?Sized> Pathfinder<'a, G> {
    pub fn new(grid: &'a G, start: Point, goal: Point) -> Pathfinder<'a, G> {
        Pathfinder {
            grid,
            start,
            goal,
            config: PathfinderConfig::default(),
            search_count: 0,
            frontier: PhantomData,
        }
    }
}

impl<'a, G: GridOracle + ?Sized, Q: Frontier<Point>> Pathfinder<'a, G, Q> {
    /// Switches the open set implementation, e.g. to a [HeapQueue](crate::HeapQueue).
    pub fn with_frontier<R: Frontier<Point>>(self) -> Pathfinder<'a, G, R> {
        Pathfinder {
            grid: self.grid,
            start: self.start,
            goal: self.goal,
            config: self.config,
            search_count: self.search_count,
            frontier: PhantomData,
        }
    }
    pub fn with_config(mut self, config: PathfinderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }
    pub fn goal(&self) -> Point {
        self.goal
    }
    pub fn set_endpoints(&mut self, start: Point, goal: Point) {
        self.start = start;
        self.goal = goal;
    }

    /// Number of dequeues the last call to [find_path](Self::find_path) performed, stale
    /// duplicates included. Diagnostic only.
    pub fn search_count(&self) -> usize {
        self.search_count
    }

    fn validate_endpoints(&self) -> Result<(), PathError> {
        if !self.grid.is_inside(self.start) {
            return Err(PathError::StartOutOfBounds(self.start));
        }
        if !self.grid.is_walkable(self.start) {
            return Err(PathError::StartBlocked(self.start));
        }
        if !self.grid.is_inside(self.goal) {
            return Err(PathError::GoalOutOfBounds(self.goal));
        }
        if !self.grid.is_walkable(self.goal) {
            return Err(PathError::GoalBlocked(self.goal));
        }
        Ok(())
    }

    /// Computes a cost-optimal 4-connected path from start to goal, both included.
    ///
    /// Returns `Ok(None)` if the goal cannot be reached, which is distinct from the
    /// single-element path returned when start and goal coincide. Endpoints outside the grid or
    /// on blocked tiles are rejected before searching.
    pub fn find_path(&mut self) -> Result<Option<Vec<Point>>, PathError> {
        self.search_count = 0;
        if let Err(e) = self.validate_endpoints() {
            warn!("Rejecting search from {:?} to {:?}: {}", self.start, self.goal, e);
            return Err(e);
        }
        debug!("Searching path from {:?} to {:?}", self.start, self.goal);

        let mut state: SearchState<Q> = SearchState::new();
        state.g_score.insert(self.start, 0);
        state
            .open
            .enqueue(self.start, manhattan_distance(&self.start, &self.goal));

        while !state.open.is_empty() {
            if let Some(limit) = self.config.step_limit {
                if self.search_count >= limit {
                    warn!(
                        "Step limit of {} reached searching from {:?} to {:?}",
                        limit, self.start, self.goal
                    );
                    return Err(PathError::StepLimitExceeded {
                        steps: self.search_count,
                    });
                }
            }
            let current = state.open.dequeue();
            self.search_count += 1;

            if current == self.goal {
                let path = state.reconstruct_path(current);
                debug!(
                    "Found path of {} steps after {} dequeues",
                    path.len() - 1,
                    self.search_count
                );
                return Ok(Some(path));
            }
            // A stale duplicate of an already expanded point
            if !state.closed.insert(current) {
                continue;
            }

            // Every point that entered the frontier has a g-score
            let current_g = state.g_score[&current];
            let neighbours = NEUMANN_OFFSETS
                .iter()
                .filter_map(|(dx, dy)| {
                    Some(Point::new(current.x.checked_add(*dx)?, current.y.checked_add(*dy)?))
                })
                .filter(|p| self.grid.is_valid(*p) && !state.closed.contains(p))
                .collect::<SmallVec<[Point; N_NEIGHBOURS]>>();

            for neighbour in neighbours {
                let tentative = current_g.saturating_add(STEP_COST);
                if state.improve(neighbour, current, tentative) {
                    let f = tentative.saturating_add(manhattan_distance(&neighbour, &self.goal));
                    trace!("Relaxed {:?} via {:?}: g = {}, f = {}", neighbour, current, tentative, f);
                    state.open.enqueue(neighbour, f);
                }
            }
        }
        info!(
            "{:?} is not reachable from {:?} ({} dequeues)",
            self.goal, self.start, self.search_count
        );
        Ok(None)
    }
}

/// Runs a single search with the default linear frontier and no step limit.
pub fn find_path<G: GridOracle + ?Sized>(
    grid: &G,
    start: Point,
    goal: Point,
) -> Result<Option<Vec<Point>>, PathError> {
    Pathfinder::new(grid, start, goal).find_path()
}
