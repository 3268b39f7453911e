//! # grid_astar
//!
//! A grid-based pathfinding system for agents that have to walk around obstacles. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) on a 4-connected grid with uniform
//! step cost, guided by the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry). The open set is any
//! [Frontier]; a linear-scan [PriorityQueue] is used by default and a [HeapQueue] can be
//! swapped in for large grids without changing results.
//!
//! Besides the search itself the crate contains a [PathingGrid] oracle with
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)), a timed
//! [PathPlayback], a small behavior tree and a distance driven enemy state machine.
pub mod astar;
pub mod behavior;
pub mod enemy;
pub mod grid;
pub mod path;
pub mod priority_queue;

pub use astar::{find_path, manhattan_distance, PathError, Pathfinder, PathfinderConfig};
pub use grid::{GridOracle, ParseGridError, PathingGrid};
pub use path::{is_contiguous, path_cost, PathPlayback};
pub use priority_queue::{Frontier, HeapQueue, PriorityQueue};

/// Cost of a single orthogonal step.
pub const STEP_COST: i32 = 1;

/// Upper bound on the neighbours a cell can have on a 4-grid.
pub const N_NEIGHBOURS: usize = 4;

/// Expansion order of the 4-neighbourhood: down, up, left, right.
pub(crate) const NEUMANN_OFFSETS: [(i32, i32); N_NEIGHBOURS] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
