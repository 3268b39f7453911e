use std::time::Duration;

use grid_astar::{HeapQueue, PathPlayback, PathingGrid, Pathfinder};
use grid_util::point::Point;

// Finds a path through a small maze and plays it back one cell at a time, redrawing the grid
// with the cells visited so far.
const MAP: &str = "
S...#.....
.##.#.###.
.#..#...#.
.#.####.#.
.#......#.
.######.#.
........#G
";

fn main() {
    let pathing_grid: PathingGrid = MAP.parse().expect("demo map is valid");
    println!("{}", pathing_grid);
    let start = Point::new(0, 0);
    let goal = Point::new(9, 6);
    let mut pathfinder =
        Pathfinder::new(&pathing_grid, start, goal).with_frontier::<HeapQueue<Point>>();
    let path = match pathfinder.find_path() {
        Ok(Some(path)) => path,
        Ok(None) => {
            println!("No path from {:?} to {:?}", start, goal);
            return;
        }
        Err(e) => {
            println!("Invalid search: {}", e);
            return;
        }
    };
    println!("AStar: {}", pathfinder.search_count());
    let mut shown = Vec::new();
    PathPlayback::new(path)
        .with_delay(Duration::from_millis(100))
        .play(|i, cell| {
            shown.push(cell);
            println!("Step {}: {:?}\n{}", i, cell, pathing_grid.render_path(&shown));
        });
}
