//! Per-cell traversal state: [`Tile`].

use crate::Coord;

/// One cell of a battle map.
///
/// The coordinate is fixed at creation; the traversal fields are owned by
/// the grid and mutated through it between searches. The movement cost is
/// the price in movement points for *entering* the tile and is kept at 1
/// or above wherever it is set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    coord: Coord,
    obstacle: bool,
    movement_cost: i32,
    occupied: bool,
}

impl Tile {
    /// Create a passable, unoccupied tile with movement cost 1.
    pub const fn new(coord: Coord) -> Self {
        Self {
            coord,
            obstacle: false,
            movement_cost: 1,
            occupied: false,
        }
    }

    /// The coordinate this tile sits at.
    #[inline]
    pub const fn coord(self) -> Coord {
        self.coord
    }

    /// Whether the tile can never be entered.
    #[inline]
    pub const fn is_obstacle(self) -> bool {
        self.obstacle
    }

    /// Movement points charged for entering this tile.
    #[inline]
    pub const fn movement_cost(self) -> i32 {
        self.movement_cost
    }

    /// Whether a unit currently stands on this tile.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        self.occupied
    }

    /// Mark or unmark the tile as impassable.
    pub fn set_obstacle(&mut self, obstacle: bool) {
        self.obstacle = obstacle;
    }

    /// Set the entry cost, clamped to at least 1.
    pub fn set_movement_cost(&mut self, cost: i32) {
        self.movement_cost = cost.max(1);
    }

    /// Mark or unmark the tile as occupied by a unit.
    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }
}
