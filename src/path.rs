use std::thread;
use std::time::Duration;

use grid_util::point::Point;
use itertools::Itertools;

use crate::STEP_COST;

/// Checks that consecutive points differ by exactly one unit along exactly one axis.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| (a.x - b.x).abs() + (a.y - b.y).abs() == 1)
}

/// Cost of following the path, i.e. its number of steps times [STEP_COST].
pub fn path_cost(path: &[Point]) -> i32 {
    path.len().saturating_sub(1) as i32 * STEP_COST
}

/// Walks a found path cell by cell, the way the visualizer highlights it. As an [Iterator] it
/// yields `(index, cell)` pairs without waiting; [play](Self::play) waits [delay](Self::delay)
/// after handing each cell to the sink.
#[derive(Clone, Debug)]
pub struct PathPlayback {
    path: Vec<Point>,
    delay: Duration,
    index: usize,
}

impl PathPlayback {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

    pub fn new(path: Vec<Point>) -> PathPlayback {
        PathPlayback {
            path,
            delay: Self::DEFAULT_DELAY,
            index: 0,
        }
    }
    pub fn with_delay(mut self, delay: Duration) -> PathPlayback {
        self.delay = delay;
        self
    }
    pub fn delay(&self) -> Duration {
        self.delay
    }
    /// Number of cells not yet played back.
    pub fn remaining(&self) -> usize {
        self.path.len() - self.index
    }

    /// Blocks the calling thread for the whole playback.
    pub fn play<F>(self, mut sink: F)
    where
        F: FnMut(usize, Point),
    {
        let delay = self.delay;
        for (i, cell) in self {
            sink(i, cell);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
    }
}

impl Iterator for PathPlayback {
    type Item = (usize, Point);

    fn next(&mut self) -> Option<Self::Item> {
        let cell = *self.path.get(self.index)?;
        let i = self.index;
        self.index += 1;
        Some((i, cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_path() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(2, 1),
        ]
    }

    #[test]
    fn contiguity() {
        assert!(is_contiguous(&l_path()));
        assert!(is_contiguous(&[Point::new(3, 3)]));
        assert!(is_contiguous(&[]));
        // Diagonal step
        assert!(!is_contiguous(&[Point::new(0, 0), Point::new(1, 1)]));
        // Standing still
        assert!(!is_contiguous(&[Point::new(0, 0), Point::new(0, 0)]));
    }

    #[test]
    fn cost_counts_steps() {
        assert_eq!(path_cost(&l_path()), 3);
        assert_eq!(path_cost(&[Point::new(2, 2)]), 0);
        assert_eq!(path_cost(&[]), 0);
    }

    #[test]
    fn playback_visits_cells_in_order() {
        let playback = PathPlayback::new(l_path());
        assert_eq!(playback.delay(), PathPlayback::DEFAULT_DELAY);
        assert_eq!(playback.remaining(), 4);
        let cells = playback.map(|(_, p)| p).collect::<Vec<Point>>();
        assert_eq!(cells, l_path());
    }

    #[test]
    fn play_hands_every_cell_to_sink() {
        let mut seen = Vec::new();
        PathPlayback::new(l_path())
            .with_delay(Duration::ZERO)
            .play(|i, p| seen.push((i, p)));
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[3], (3, Point::new(2, 1)));
    }
}
