//! Core grid data model for turn-based tactical movement.
//!
//! A battle map is a bounded rectangle of [`Tile`]s addressed by integer
//! [`Coord`]inates on the ground plane (x grows right, z grows forward).
//! Each tile carries the traversal state the movement rules care about:
//! whether it is an obstacle, what it costs to enter, and whether a unit
//! currently stands on it.
//!
//! [`TileGrid`] is the concrete rectangular map; search code consumes it
//! through the `GridQuery` trait of the companion `tacgrid-paths` crate.
//! Maps can be built programmatically or parsed from ASCII art via
//! [`TileGrid::from_ascii`].

mod coord;
mod grid;
mod tile;

pub use coord::Coord;
pub use grid::{MapError, TileGrid};
pub use tile::Tile;
