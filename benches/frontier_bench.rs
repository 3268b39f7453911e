use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{Frontier, HeapQueue, PathingGrid, Pathfinder, PriorityQueue};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grid(n: usize, rng: &mut StdRng) -> PathingGrid {
    let mut pathing_grid = PathingGrid::new(n, n, false);
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            pathing_grid.set(x, y, rng.gen_bool(0.25));
        }
    }
    pathing_grid.generate_components();
    pathing_grid
}

fn scenarios(grid: &PathingGrid, number: usize, rng: &mut StdRng) -> Vec<(Point, Point)> {
    let n = grid.width() as i32;
    let mut scenarios = Vec::new();
    while scenarios.len() < number {
        let start = Point::new(rng.gen_range(0..n), rng.gen_range(0..n));
        let goal = Point::new(rng.gen_range(0..n), rng.gen_range(0..n));
        if grid.reachable(&start, &goal) {
            scenarios.push((start, goal));
        }
    }
    scenarios
}

fn bench_frontier<Q: Frontier<Point>>(c: &mut Criterion, frontier_name: &str) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [16, 64] {
        let pathing_grid = random_grid(n, &mut rng);
        let scenarios = scenarios(&pathing_grid, 20, &mut rng);
        c.bench_function(format!("{n}x{n}, {frontier_name}").as_str(), |b| {
            b.iter(|| {
                for (start, goal) in &scenarios {
                    let mut pathfinder =
                        Pathfinder::new(&pathing_grid, *start, *goal).with_frontier::<Q>();
                    black_box(pathfinder.find_path().ok());
                }
            })
        });
    }
}

fn linear_bench(c: &mut Criterion) {
    bench_frontier::<PriorityQueue<Point>>(c, "linear scan");
}

fn heap_bench(c: &mut Criterion) {
    bench_frontier::<HeapQueue<Point>>(c, "binary heap");
}

criterion_group!(benches, linear_bench, heap_bench);
criterion_main!(benches);
