use grid_astar::{PathingGrid, Pathfinder};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;

// In this example a path is found on a grid with shape
// #####
// #S  #
// # # #
// #  E#
// #####
// S marks the start
// E marks the end
fn main() {
    let mut pathing_grid: PathingGrid = PathingGrid::new(5, 5, true);
    for x in 1..4 {
        for y in 1..4 {
            pathing_grid.set(x, y, false);
        }
    }
    pathing_grid.set(2, 2, true);
    let start = Point::new(1, 1);
    let end = Point::new(3, 3);
    let mut pathfinder = Pathfinder::new(&pathing_grid, start, end);
    match pathfinder.find_path() {
        Ok(Some(path)) => {
            println!("A path has been found:");
            for p in path {
                println!("{:?}", p);
            }
        }
        Ok(None) => println!("{:?} cannot be reached from {:?}", end, start),
        Err(e) => println!("Invalid search: {}", e),
    }
    println!("Dequeues: {}", pathfinder.search_count());
}
