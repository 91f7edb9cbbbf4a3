use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use mazes::generators::{FrontierStrategy, MazeGenerator};
use mazes::grid::{BinaryGrid, CellState};
use mazes::pathing::{MazeSolver, SearchMode, SolverConfig};
use mazes::units::{GridSide, LogicalSide};

fn maze(side: usize, strategy: FrontierStrategy) -> BinaryGrid {
    MazeGenerator::with_seed(LogicalSide(side), strategy, 11).unwrap().generate().grid
}

fn bench_heuristic_solve(c: &mut Criterion) {
    c.bench_function("heuristic_solve_64", |b| {
        let g = maze(64, FrontierStrategy::MostRecent);
        b.iter(|| MazeSolver::new(&g).solve())
    });
}

fn bench_exact_solve(c: &mut Criterion) {
    c.bench_function("exact_solve_64", |b| {
        let g = maze(64, FrontierStrategy::MostRecent);
        let config = SolverConfig { mode: SearchMode::Exact, ..SolverConfig::default() };
        b.iter(|| MazeSolver::with_config(&g, config).solve())
    });
}

fn bench_random_frontier_solve(c: &mut Criterion) {
    c.bench_function("random_frontier_solve_64", |b| {
        let g = maze(64, FrontierStrategy::Random);
        b.iter(|| MazeSolver::new(&g).solve())
    });
}

fn bench_open_grid_solve(c: &mut Criterion) {
    c.bench_function("open_grid_solve_127", |b| {
        let g = BinaryGrid::new(GridSide(127), CellState::Passage).unwrap();
        b.iter(|| MazeSolver::new(&g).solve())
    });
}

criterion_group!(
    benches,
    bench_heuristic_solve,
    bench_exact_solve,
    bench_random_frontier_solve,
    bench_open_grid_solve
);
criterion_main!(benches);
