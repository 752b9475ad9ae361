//! Grid addressing: [`Coord`].

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer grid coordinate on the ground plane.
///
/// X grows right, Z grows forward. Exactly one tile exists per coordinate,
/// so coordinates double as tile identity throughout the movement code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub z: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Return a coordinate shifted by (dx, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// The four orthogonal neighbours (back, right, forward, left).
    ///
    /// The enumeration order is fixed; searches rely on it for
    /// deterministic tie-breaking.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        [
            Self::new(self.x, self.z - 1),
            Self::new(self.x + 1, self.z),
            Self::new(self.x, self.z + 1),
            Self::new(self.x - 1, self.z),
        ]
    }

    /// All eight neighbours (orthogonal + diagonal).
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        [
            Self::new(self.x, self.z - 1),
            Self::new(self.x + 1, self.z - 1),
            Self::new(self.x + 1, self.z),
            Self::new(self.x + 1, self.z + 1),
            Self::new(self.x, self.z + 1),
            Self::new(self.x - 1, self.z + 1),
            Self::new(self.x - 1, self.z),
            Self::new(self.x - 1, self.z - 1),
        ]
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z.cmp(&other.z).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}
