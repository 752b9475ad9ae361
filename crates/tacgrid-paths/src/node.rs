//! Per-search bookkeeping shared by the A* and range sweeps.

use std::collections::HashMap;

use tacgrid_core::Coord;

/// Search state for one visited coordinate.
///
/// Parents always point strictly back toward the origin, forming a tree
/// that exists only for the duration of one search call.
pub(crate) struct Node {
    /// Cheapest cost found so far from the origin.
    pub(crate) g: i32,
    /// Coordinate this node was reached from; `None` for the origin.
    pub(crate) parent: Option<Coord>,
    /// Still awaiting finalization. Cleared when the node is popped.
    pub(crate) open: bool,
}

/// Node arena for a single search call, keyed by coordinate.
pub(crate) type Arena = HashMap<Coord, Node>;

/// Heap entry ordered so the entry with lowest `f` pops first, `f`-ties
/// broken by lowest `h` (prefer nodes estimated closer to the goal), then
/// by coordinate order so pops are fully deterministic.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenRef {
    pub(crate) pos: Coord,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed comparisons: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Walk parent links from `goal` back to the root and return the path in
/// origin-to-goal order.
pub(crate) fn reconstruct(arena: &Arena, goal: Coord) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(p) = cur {
        path.push(p);
        cur = arena.get(&p).and_then(|n| n.parent);
    }
    path.reverse();
    path
}
