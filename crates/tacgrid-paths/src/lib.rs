//! Budgeted pathfinding for turn-based tactical grids.
//!
//! The movement rules of a turn-based game boil down to two questions,
//! both answered here over a read-only grid snapshot:
//!
//! - **Cheapest route**: the minimum-cost path between two tiles that
//!   fits a movement-point budget ([`find_path`], A* with budget pruning)
//! - **Movement range**: every tile reachable under a budget, each paired
//!   with the route used to get there ([`reachable_tiles`])
//!
//! Supporting cost-model primitives ([`enter_cost`], [`path_cost`],
//! [`is_diagonal_move`]) and distance functions ([`manhattan`],
//! [`chebyshev`]) are exported for callers that account movement points
//! themselves.
//!
//! All searches go through the [`GridQuery`] trait and never mutate the
//! grid. A call runs to completion with working state local to the
//! invocation, so it is pure and deterministic: the same snapshot always
//! yields the same path and the same range. A miss (`None`, or a tile
//! absent from the range map) is a normal in-band answer, not an error.

mod astar;
mod cost;
mod distance;
mod node;
mod reach;
mod traits;

pub use astar::find_path;
pub use cost::{enter_cost, is_diagonal_move, path_cost};
pub use distance::{chebyshev, manhattan};
pub use reach::{ReachSet, reachable_tiles};
pub use traits::GridQuery;
