use std::collections::{BTreeMap, BinaryHeap};

use tacgrid_core::Coord;

use crate::cost::enter_cost;
use crate::node::{Arena, Node, OpenRef, reconstruct};
use crate::traits::GridQuery;

/// Every tile reachable under a budget, mapped to the route used to reach
/// it (origin first). The origin maps to its singleton path. Ordered by
/// coordinate, so iteration is deterministic.
pub type ReachSet = BTreeMap<Coord, Vec<Coord>>;

/// Compute every tile reachable from `origin` spending at most `budget`
/// movement points, with a cheapest path to each.
///
/// A single Dijkstra sweep bounded by the budget relaxes the whole range
/// at once, so the cost is one search rather than one per candidate
/// destination. Obstacles are never entered. Occupied tiles may be crossed
/// but are dropped as destinations, except the origin itself, which is
/// normally occupied by the unit asking. A budget of 0 (or less) yields
/// only the origin; an origin without a tile yields an empty set.
pub fn reachable_tiles<G: GridQuery>(grid: &G, origin: Coord, budget: i32) -> ReachSet {
    let mut out = ReachSet::new();
    if grid.tile_at(origin).is_none() {
        return out;
    }

    let mut arena = Arena::new();
    arena.insert(
        origin,
        Node {
            g: 0,
            parent: None,
            open: true,
        },
    );

    let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
    open.push(OpenRef {
        pos: origin,
        f: 0,
        h: 0,
    });

    while let Some(current) = open.pop() {
        let cp = current.pos;
        let current_g = {
            let Some(node) = arena.get_mut(&cp) else {
                continue;
            };
            if !node.open {
                continue;
            }
            node.open = false;
            node.g
        };

        for np in cp.neighbors_4() {
            let Some(tile) = grid.tile_at(np) else {
                continue;
            };
            if tile.is_obstacle() {
                continue;
            }

            // Saturating for the same reason as the A* search: budgets may
            // sit near i32::MAX.
            let tentative = current_g.saturating_add(enter_cost(cp, tile));
            if tentative > budget {
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
            open.push(OpenRef {
                pos: np,
                f: tentative,
                h: 0,
            });
        }
    }

    // Every tile in the arena was finalized within budget. Walk the grid's
    // own enumeration and keep the valid destinations, each with its path.
    for tile in grid.tiles() {
        let pos = tile.coord();
        if tile.is_obstacle() {
            continue;
        }
        if tile.is_occupied() && pos != origin {
            continue;
        }
        if !arena.contains_key(&pos) {
            continue;
        }
        out.insert(pos, reconstruct(&arena, pos));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::find_path;
    use crate::cost::path_cost;
    use crate::distance::manhattan;
    use tacgrid_core::TileGrid;

    fn c(x: i32, z: i32) -> Coord {
        Coord::new(x, z)
    }

    #[test]
    fn zero_budget_yields_only_the_origin() {
        let g = TileGrid::new(3, 3);
        let set = reachable_tiles(&g, c(1, 1), 0);
        assert_eq!(set.len(), 1);
        assert_eq!(set[&c(1, 1)], vec![c(1, 1)]);
        // Negative budgets behave the same; they are not rejected.
        assert_eq!(reachable_tiles(&g, c(1, 1), -4), set);
    }

    #[test]
    fn open_grid_range_is_a_manhattan_ball() {
        let g = TileGrid::new(3, 3);
        let set = reachable_tiles(&g, c(0, 0), 3);
        for tile in g.iter() {
            let within = manhattan(c(0, 0), tile.coord()) <= 3;
            assert_eq!(set.contains_key(&tile.coord()), within, "{}", tile.coord());
        }
        assert!(!set.contains_key(&c(2, 2)));
    }

    #[test]
    fn paths_agree_with_single_target_search() {
        let g = TileGrid::from_ascii(
            "\
..3.
.#..
..o.
....",
        )
        .unwrap();
        let budget = 5;
        let set = reachable_tiles(&g, c(0, 0), budget);
        for (to, path) in &set {
            assert_eq!(path.first(), Some(&c(0, 0)));
            assert_eq!(path.last(), Some(to));
            let cost = path_cost(&g, path);
            assert!(cost <= budget);
            let single = find_path(&g, c(0, 0), *to, budget).unwrap();
            assert_eq!(cost, path_cost(&g, &single));
        }
    }

    #[test]
    fn obstacles_and_occupied_tiles_are_not_destinations() {
        let g = TileGrid::from_ascii(
            "\
.o.
.#.",
        )
        .unwrap();
        let set = reachable_tiles(&g, c(0, 0), 10);
        assert!(!set.contains_key(&c(1, 0)), "occupied tile listed");
        assert!(!set.contains_key(&c(1, 1)), "obstacle listed");
        // The occupied tile is still crossed to reach what lies beyond.
        assert_eq!(set[&c(2, 0)], vec![c(0, 0), c(1, 0), c(2, 0)]);
    }

    #[test]
    fn occupied_origin_is_included() {
        let g = TileGrid::from_ascii("o.").unwrap();
        let set = reachable_tiles(&g, c(0, 0), 1);
        assert_eq!(set[&c(0, 0)], vec![c(0, 0)]);
        assert_eq!(set[&c(1, 0)], vec![c(0, 0), c(1, 0)]);
    }

    #[test]
    fn obstacle_origin_is_excluded_but_still_expands() {
        let g = TileGrid::from_ascii("#.").unwrap();
        let set = reachable_tiles(&g, c(0, 0), 1);
        assert!(!set.contains_key(&c(0, 0)));
        assert_eq!(set[&c(1, 0)], vec![c(0, 0), c(1, 0)]);
    }

    #[test]
    fn growing_the_budget_never_shrinks_the_range() {
        let g = TileGrid::from_ascii(
            "\
..3.
.#..
..o.
....",
        )
        .unwrap();
        let mut previous = ReachSet::new();
        for budget in 0..=8 {
            let set = reachable_tiles(&g, c(0, 0), budget);
            for reached in previous.keys() {
                assert!(set.contains_key(reached), "budget {budget} lost {reached}");
            }
            previous = set;
        }
    }

    #[test]
    fn extreme_budget_and_tile_cost_stay_in_range() {
        let mut g = TileGrid::new(3, 1);
        g.set_movement_cost(c(1, 0), i32::MAX);
        let set = reachable_tiles(&g, c(0, 0), i32::MAX);
        assert_eq!(set.len(), 3);
        assert_eq!(set[&c(2, 0)], vec![c(0, 0), c(1, 0), c(2, 0)]);
        // A finite budget keeps the far side out of range.
        assert!(!reachable_tiles(&g, c(0, 0), 1000).contains_key(&c(2, 0)));
    }

    #[test]
    fn off_grid_origin_yields_empty_set() {
        let g = TileGrid::new(2, 2);
        assert!(reachable_tiles(&g, c(5, 5), 3).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let g = TileGrid::from_ascii(
            "\
.2.
o#.
...",
        )
        .unwrap();
        let first = reachable_tiles(&g, c(0, 0), 4);
        for _ in 0..5 {
            assert_eq!(reachable_tiles(&g, c(0, 0), 4), first);
        }
    }
}
