use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{
    generators::{FrontierStrategy, MazeGenerator},
    units::LogicalSide,
};

fn bench_most_recent_maze_32(c: &mut Criterion) {
    c.bench_function("most_recent_maze_32", |b| {
        b.iter(|| {
            MazeGenerator::with_seed(LogicalSide(32), FrontierStrategy::MostRecent, 7)
                .unwrap()
                .generate()
        })
    });
}

fn bench_random_frontier_maze_32(c: &mut Criterion) {
    c.bench_function("random_frontier_maze_32", |b| {
        b.iter(|| {
            MazeGenerator::with_seed(LogicalSide(32), FrontierStrategy::Random, 7)
                .unwrap()
                .generate()
        })
    });
}

fn bench_most_recent_maze_128(c: &mut Criterion) {
    c.bench_function("most_recent_maze_128", |b| {
        b.iter(|| {
            MazeGenerator::with_seed(LogicalSide(128), FrontierStrategy::MostRecent, 7)
                .unwrap()
                .generate()
        })
    });
}

criterion_group!(
    benches,
    bench_most_recent_maze_32,
    bench_random_frontier_maze_32,
    bench_most_recent_maze_128
);
criterion_main!(benches);
