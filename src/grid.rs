use core::fmt;
use std::str::FromStr;

use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use thiserror::Error;

use crate::NEUMANN_OFFSETS;

/// Bounds and walkability queries the search consults. Implementations are read-only during a
/// search, so sharing one between threads only requires the implementor to be [Sync].
pub trait GridOracle {
    /// True iff the point lies within the grid's bounds.
    fn is_inside(&self, point: Point) -> bool;
    /// True iff the tile at the point is passable. Only meaningful for points inside the grid.
    fn is_walkable(&self, point: Point) -> bool;

    fn is_valid(&self, point: Point) -> bool {
        self.is_inside(point) && self.is_walkable(point)
    }
}

impl<G: GridOracle + ?Sized> GridOracle for &G {
    fn is_inside(&self, point: Point) -> bool {
        (**self).is_inside(point)
    }
    fn is_walkable(&self, point: Point) -> bool {
        (**self).is_walkable(point)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("grid map contains no rows")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {tile:?} at ({x}, {y})")]
    InvalidTile { tile: char, x: usize, y: usize },
}

/// [PathingGrid] keeps the raw [bool] values in a [BoolGrid] that determine whether a space is
/// blocked ([true]) or walkable ([false]), together with the 4-connected components of the
/// walkable tiles in a [UnionFind] structure.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.grid.width() && (y as usize) < self.grid.height()
    }
    fn ix(&self, point: &Point) -> usize {
        point.y as usize * self.grid.width() + point.x as usize
    }

    /// Walkable 4-neighbours of a point.
    pub fn walkable_neighbours(&self, point: &Point) -> impl Iterator<Item = Point> + '_ {
        let point = *point;
        NEUMANN_OFFSETS
            .iter()
            .filter_map(move |(dx, dy)| {
                Some(Point::new(point.x.checked_add(*dx)?, point.y.checked_add(*dy)?))
            })
            .filter(move |p| self.is_valid(*p))
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.ix(point))
    }

    /// Checks if start and goal are walkable and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not both walkable members of the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.is_valid(*start) && self.is_valid(*goal) {
            !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up walkable 4-neighbours.
    pub fn generate_components(&mut self) {
        let w = self.grid.width();
        let h = self.grid.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.is_walkable(point) {
                    continue;
                }
                let parent_ix = self.ix(&point);
                // Right and down suffice, the left and up links are made from the other side
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_valid(n) {
                        let ix = self.ix(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    /// Renders the grid like [Display](fmt::Display) does, with the path drawn on top:
    /// `S` and `G` mark its endpoints and `*` the cells in between.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut out = String::new();
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                let p = Point::new(x, y);
                let tile = if path.first() == Some(&p) {
                    'S'
                } else if path.last() == Some(&p) {
                    'G'
                } else if path.contains(&p) {
                    '*'
                } else if self.grid.get(x, y) {
                    '#'
                } else {
                    '.'
                };
                out.push(tile);
            }
            out.push('\n');
        }
        out
    }
}

impl GridOracle for PathingGrid {
    fn is_inside(&self, point: Point) -> bool {
        self.in_bounds(point.x, point.y)
    }
    fn is_walkable(&self, point: Point) -> bool {
        // Out-of-bounds points must never reach the grid lookup
        self.in_bounds(point.x, point.y) && !self.grid.get(point.x, point.y)
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.grid.height() as i32 {
            let row = (0..self.grid.width() as i32)
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Parses a map where `#` is blocked and `.`, `S` or `G` are walkable. The first line is row
/// `y = 0`. Components are generated for the parsed grid.
impl FromStr for PathingGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>();
        let width = match rows.first() {
            Some(row) => row.chars().count(),
            None => return Err(ParseGridError::Empty),
        };
        let mut pathing_grid = PathingGrid::new(width, rows.len(), false);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ParseGridError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, tile) in row.chars().enumerate() {
                let blocked = match tile {
                    '#' => true,
                    '.' | 'S' | 'G' => false,
                    _ => return Err(ParseGridError::InvalidTile { tile, x, y }),
                };
                pathing_grid.grid.set(x as i32, y as i32, blocked);
            }
        }
        pathing_grid.generate_components();
        Ok(pathing_grid)
    }
}

impl ValueGrid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let mut base_grid = PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        base_grid.generate_components();
        base_grid
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let p = Point::new(x, y);
        self.grid.set(x, y, blocked);
        if blocked {
            self.components_dirty = true;
        } else {
            let p_ix = self.ix(&p);
            let neighbours = self.walkable_neighbours(&p).collect::<Vec<Point>>();
            for n in neighbours {
                let n_ix = self.ix(&n);
                self.components.union(p_ix, n_ix);
            }
        }
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
