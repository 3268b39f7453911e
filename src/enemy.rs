//! Finite state machine that switches an enemy between idling, chasing and attacking based on
//! its distance to a target.
use log::debug;

/// Continuous world position, as opposed to the grid [Point](grid_util::point::Point).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Position {
        Position { x, y }
    }
    pub fn distance(&self, other: &Position) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
    /// Moves towards `target` by at most `max_delta` without overshooting it.
    pub fn move_towards(&self, target: &Position, max_delta: f32) -> Position {
        let distance = self.distance(target);
        if distance <= max_delta || distance == 0.0 {
            return *target;
        }
        let t = max_delta / distance;
        Position::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyState {
    Idle,
    Chase,
    Attack,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyConfig {
    /// Distance covered per second while chasing.
    pub speed: f32,
    pub chase_range: f32,
    /// Must be smaller than `chase_range`, otherwise the enemy never chases.
    pub attack_range: f32,
}

impl Default for EnemyConfig {
    fn default() -> EnemyConfig {
        EnemyConfig {
            speed: 2.0,
            chase_range: 5.0,
            attack_range: 1.5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub position: Position,
    pub config: EnemyConfig,
    state: EnemyState,
}

impl Enemy {
    pub fn new(position: Position, config: EnemyConfig) -> Enemy {
        Enemy {
            position,
            config,
            state: EnemyState::Idle,
        }
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    /// State an enemy at `distance` from its target should be in.
    pub fn transition_for(&self, distance: f32) -> EnemyState {
        if distance <= self.config.attack_range {
            EnemyState::Attack
        } else if distance <= self.config.chase_range {
            EnemyState::Chase
        } else {
            EnemyState::Idle
        }
    }

    /// Runs one tick: acts according to the current state, then re-evaluates the state from the
    /// distance to `target`. Returns the state for the next tick.
    pub fn update(&mut self, target: &Position, dt: f32) -> EnemyState {
        match self.state {
            EnemyState::Chase => {
                self.position = self
                    .position
                    .move_towards(target, self.config.speed * dt);
            }
            EnemyState::Idle | EnemyState::Attack => {}
        }
        let next = self.transition_for(self.position.distance(target));
        if next != self.state {
            debug!("Enemy at {:?}: {:?} -> {:?}", self.position, self.state, next);
            self.state = next;
        }
        self.state
    }
}
