use std::collections::BinaryHeap;

use tacgrid_core::Coord;

use crate::cost::enter_cost;
use crate::distance::manhattan;
use crate::node::{Arena, Node, OpenRef, reconstruct};
use crate::traits::GridQuery;

/// Compute the cheapest path from `from` to `to` spending at most
/// `max_budget` movement points, using A*.
///
/// Returns the full path (both endpoints included, `from` first), or
/// `None` when no route fits the budget, the grid is disconnected, or an
/// endpoint has no tile. `from == to` is answered immediately with the
/// singleton path, which costs nothing, for any budget.
///
/// Routes never enter obstacles or leave the grid. Occupied tiles are
/// traversable here: filtering destinations by occupancy is the range
/// query's concern, not the path search's.
pub fn find_path<G: GridQuery>(
    grid: &G,
    from: Coord,
    to: Coord,
    max_budget: i32,
) -> Option<Vec<Coord>> {
    grid.tile_at(from)?;
    grid.tile_at(to)?;

    if from == to {
        return Some(vec![from]);
    }

    let mut arena = Arena::new();
    arena.insert(
        from,
        Node {
            g: 0,
            parent: None,
            open: true,
        },
    );

    let h0 = manhattan(from, to);
    let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
    open.push(OpenRef {
        pos: from,
        f: h0,
        h: h0,
    });

    while let Some(current) = open.pop() {
        let cp = current.pos;
        let current_g = {
            let Some(node) = arena.get_mut(&cp) else {
                continue;
            };
            // Skip entries made stale by a cheaper route found while this
            // one sat in the heap.
            if !node.open {
                continue;
            }
            node.open = false;
            node.g
        };

        if cp == to {
            return Some(reconstruct(&arena, to));
        }

        for np in cp.neighbors_4() {
            let Some(tile) = grid.tile_at(np) else {
                continue;
            };
            if tile.is_obstacle() {
                continue;
            }

            // Saturating: with budgets near i32::MAX, accumulated cost may
            // not fit, and a saturated sum still compares correctly.
            let tentative = current_g.saturating_add(enter_cost(cp, tile));
            if tentative > max_budget {
                continue;
            }

            match arena.get_mut(&np) {
                Some(n) if tentative >= n.g => continue,
                Some(n) => {
                    n.g = tentative;
                    n.parent = Some(cp);
                    n.open = true;
                }
                None => {
                    arena.insert(
                        np,
                        Node {
                            g: tentative,
                            parent: Some(cp),
                            open: true,
                        },
                    );
                }
            }

            let h = manhattan(np, to);
            open.push(OpenRef {
                pos: np,
                f: tentative.saturating_add(h),
                h,
            });
        }
    }

    None
}
