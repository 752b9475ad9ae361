//! The movement-point cost model.

use tacgrid_core::{Coord, Tile};

use crate::distance::{chebyshev, manhattan};
use crate::traits::GridQuery;

/// Whether a step from `from` to `to` is diagonal, i.e. the coordinates
/// differ by exactly 1 on both axes.
#[inline]
pub fn is_diagonal_move(from: Coord, to: Coord) -> bool {
    chebyshev(from, to) == 1 && manhattan(from, to) == 2
}

/// Movement points charged for stepping from `from` onto `into`.
///
/// A tile with a positive movement cost charges that amount. Otherwise the
/// base step model applies: 1 for an orthogonal step, 2 for a diagonal
/// one. Neighbor generation is orthogonal-only, so the diagonal branch
/// only matters to callers bringing their own step generation.
#[inline]
pub fn enter_cost(from: Coord, into: Tile) -> i32 {
    if into.movement_cost() > 0 {
        into.movement_cost()
    } else if is_diagonal_move(from, into.coord()) {
        2
    } else {
        1
    }
}

/// Total movement points a unit spends walking `path`.
///
/// Entering the first tile is free, the unit already stands there. Steps
/// onto coordinates without a tile contribute nothing; engine-produced
/// paths never contain any.
pub fn path_cost<G: GridQuery>(grid: &G, path: &[Coord]) -> i32 {
    let mut total: i32 = 0;
    for pair in path.windows(2) {
        if let Some(tile) = grid.tile_at(pair[1]) {
            total = total.saturating_add(enter_cost(pair[0], tile));
        }
    }
    total
}
