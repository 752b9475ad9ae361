//! A rectangular battle map of [`Tile`]s.

use std::fmt;

use crate::{Coord, Tile};

/// A bounded rectangular grid of tiles, addressed from (0, 0) to
/// (width - 1, height - 1).
///
/// The grid owns all tile state. Lookups outside the rectangle return
/// `None`; the mutating helpers silently ignore out-of-range coordinates,
/// matching the lookup contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid of the given size with every tile passable,
    /// unoccupied, and costing 1 to enter.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for z in 0..height {
            for x in 0..width {
                tiles.push(Tile::new(Coord::new(x, z)));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Build a grid from an ASCII map.
    ///
    /// One character per tile, lines separated by `'\n'` and all of the
    /// same width. The first line is the z = 0 row. Legend:
    ///
    /// - `.` passable floor, cost 1
    /// - `#` obstacle
    /// - `1`..`9` passable floor with that entry cost
    /// - `o` passable floor occupied by a unit
    pub fn from_ascii(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        let lines: Vec<&str> = s.lines().collect();
        let height = lines.len() as i32;
        let width = lines.first().map_or(0, |l| l.chars().count() as i32);

        let mut grid = TileGrid::new(width, height);
        for (z, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != width {
                return Err(MapError::InconsistentSize);
            }
            for (x, ch) in line.chars().enumerate() {
                let at = Coord::new(x as i32, z as i32);
                match ch {
                    '.' => {}
                    '#' => grid.set_obstacle(at, true),
                    'o' => grid.set_occupied(at, true),
                    '1'..='9' => {
                        grid.set_movement_cost(at, ch as i32 - '0' as i32);
                    }
                    _ => return Err(MapError::InvalidRune { ch, pos: at }),
                }
            }
        }
        Ok(grid)
    }

    /// Width of the grid in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the coordinate lies inside the grid rectangle.
    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        at.x >= 0 && at.z >= 0 && at.x < self.width && at.z < self.height
    }

    #[inline]
    fn index(&self, at: Coord) -> usize {
        (at.z * self.width + at.x) as usize
    }

    /// The tile at a coordinate, or `None` outside the grid.
    pub fn tile(&self, at: Coord) -> Option<&Tile> {
        if self.contains(at) {
            Some(&self.tiles[self.index(at)])
        } else {
            None
        }
    }

    /// Mutable access to the tile at a coordinate.
    pub fn tile_mut(&mut self, at: Coord) -> Option<&mut Tile> {
        if self.contains(at) {
            let i = self.index(at);
            Some(&mut self.tiles[i])
        } else {
            None
        }
    }

    /// Iterate over every tile in row-major order (z-major, then x).
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Mark or unmark a tile as impassable. No-op outside the grid.
    pub fn set_obstacle(&mut self, at: Coord, obstacle: bool) {
        if let Some(t) = self.tile_mut(at) {
            t.set_obstacle(obstacle);
        }
    }

    /// Set a tile's entry cost (clamped to ≥ 1). No-op outside the grid.
    pub fn set_movement_cost(&mut self, at: Coord, cost: i32) {
        if let Some(t) = self.tile_mut(at) {
            t.set_movement_cost(cost);
        }
    }

    /// Mark or unmark a tile as occupied. No-op outside the grid.
    pub fn set_occupied(&mut self, at: Coord, occupied: bool) {
        if let Some(t) = self.tile_mut(at) {
            t.set_occupied(occupied);
        }
    }
}

/// Errors from [`TileGrid::from_ascii`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Lines have inconsistent widths.
    InconsistentSize,
    /// A character with no tile meaning was found.
    InvalidRune { ch: char, pos: Coord },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize => write!(f, "map: inconsistent line widths"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
.#..
.3.o
....";

    #[test]
    fn new_assigns_coordinates() {
        let g = TileGrid::new(3, 2);
        assert_eq!(g.iter().count(), 6);
        assert_eq!(g.tile(Coord::new(2, 1)).unwrap().coord(), Coord::new(2, 1));
        assert!(g.tile(Coord::new(3, 0)).is_none());
        assert!(g.tile(Coord::new(0, -1)).is_none());
    }

    #[test]
    fn from_ascii_legend() {
        let g = TileGrid::from_ascii(MAP).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert!(g.tile(Coord::new(1, 0)).unwrap().is_obstacle());
        assert_eq!(g.tile(Coord::new(1, 1)).unwrap().movement_cost(), 3);
        assert!(g.tile(Coord::new(3, 1)).unwrap().is_occupied());
        let floor = g.tile(Coord::new(0, 0)).unwrap();
        assert!(!floor.is_obstacle() && !floor.is_occupied());
        assert_eq!(floor.movement_cost(), 1);
    }

    #[test]
    fn from_ascii_rejects_ragged_lines() {
        assert_eq!(
            TileGrid::from_ascii("..\n..."),
            Err(MapError::InconsistentSize)
        );
    }

    #[test]
    fn from_ascii_rejects_unknown_runes() {
        assert_eq!(
            TileGrid::from_ascii("..\n.X"),
            Err(MapError::InvalidRune {
                ch: 'X',
                pos: Coord::new(1, 1)
            })
        );
    }

    #[test]
    fn mutators_ignore_out_of_bounds() {
        let mut g = TileGrid::new(2, 2);
        g.set_obstacle(Coord::new(9, 9), true);
        g.set_movement_cost(Coord::new(-1, 0), 5);
        g.set_occupied(Coord::new(0, 9), true);
        assert!(g.iter().all(|t| !t.is_obstacle() && !t.is_occupied()));
        assert!(g.iter().all(|t| t.movement_cost() == 1));
    }

    #[test]
    fn tile_mut_edits_in_place() {
        let mut g = TileGrid::new(2, 2);
        g.tile_mut(Coord::new(1, 0)).unwrap().set_obstacle(true);
        assert!(g.tile(Coord::new(1, 0)).unwrap().is_obstacle());
    }
}
