use tacgrid_core::{Coord, Tile, TileGrid};

/// Read-only view of a grid, as consumed by every search.
///
/// The engine only ever reads through this trait; tile state is owned and
/// mutated elsewhere. A search call must be treated as a synchronous
/// snapshot read: the implementation must not change obstacle, cost, or
/// occupancy state while a call is in progress.
pub trait GridQuery {
    /// The tile at `at`, or `None` outside the grid.
    fn tile_at(&self, at: Coord) -> Option<Tile>;

    /// Every tile of the grid, for bulk range queries.
    fn tiles(&self) -> impl Iterator<Item = Tile>;
}

impl GridQuery for TileGrid {
    fn tile_at(&self, at: Coord) -> Option<Tile> {
        self.tile(at).copied()
    }

    fn tiles(&self) -> impl Iterator<Item = Tile> {
        self.iter().copied()
    }
}
