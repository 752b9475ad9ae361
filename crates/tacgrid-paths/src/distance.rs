use tacgrid_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// This is the A* heuristic: with entry costs ≥ 1 and orthogonal steps it
/// never overestimates, so the first pop of the goal is optimal.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.z - b.z).abs()
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs().max((a.z - b.z).abs())
}
