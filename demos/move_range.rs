//! Terminal demo: movement range and a single route on a small map.
//!
//! Prints the tiles a unit at `@` can reach with its movement points, then
//! the cheapest route to one far corner.

use std::error::Error;

use tacgrid_core::{Coord, TileGrid};
use tacgrid_paths::{GridQuery, find_path, path_cost, reachable_tiles};

const MAP: &str = "\
..........
.###...3..
.#...o.3..
.#.###.3..
.......3..
..33333...
..........";

const START: Coord = Coord::new(3, 2);
const BUDGET: i32 = 6;

fn main() -> Result<(), Box<dyn Error>> {
    let grid = TileGrid::from_ascii(MAP)?;
    let range = reachable_tiles(&grid, START, BUDGET);

    println!("movement range from {START} with {BUDGET} movement points:");
    for z in 0..grid.height() {
        let mut row = String::new();
        for x in 0..grid.width() {
            let at = Coord::new(x, z);
            let tile = grid.tile_at(at).expect("loop stays in bounds");
            row.push(if at == START {
                '@'
            } else if range.contains_key(&at) {
                '*'
            } else if tile.is_obstacle() {
                '#'
            } else if tile.is_occupied() {
                'o'
            } else if tile.movement_cost() > 1 {
                char::from_digit(tile.movement_cost().min(9) as u32, 10).unwrap_or('+')
            } else {
                '.'
            });
        }
        println!("  {row}");
    }
    println!("  ({} tiles reachable)", range.len());

    let target = Coord::new(9, 6);
    println!();
    match find_path(&grid, START, target, 20) {
        Some(path) => {
            let steps: Vec<String> = path.iter().map(|p| p.to_string()).collect();
            println!(
                "route to {target}: {} ({} movement points)",
                steps.join(" -> "),
                path_cost(&grid, &path)
            );
        }
        None => println!("no route to {target} within 20 movement points"),
    }

    Ok(())
}
