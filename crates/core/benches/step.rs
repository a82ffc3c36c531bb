use criterion::{criterion_group, criterion_main, Criterion};
use forest_fire_core::{step, step_parallel, Grid, RandomSource, RngSource, SimulationParams};
use std::hint::black_box;

fn reference_grid(size: usize) -> Grid {
    let mut rng: Box<dyn RandomSource> = Box::new(RngSource::thread());
    Grid::randomize(size, size, SimulationParams::DEFAULT_TREE_DENSITY, &mut rng)
}

fn bench_step_sequential(c: &mut Criterion) {
    let params = SimulationParams::default();
    let grid = reference_grid(params.grid_size);
    let mut rng = RngSource::thread();

    c.bench_function("step_sequential_50x50", |b| {
        b.iter(|| step(black_box(&grid), &params, &mut rng));
    });
}

fn bench_step_large(c: &mut Criterion) {
    let params = SimulationParams::new(512, 0.05, 0.001).unwrap();
    let grid = reference_grid(params.grid_size);
    let mut rng = RngSource::thread();

    c.bench_function("step_sequential_512x512", |b| {
        b.iter(|| step(black_box(&grid), &params, &mut rng));
    });

    c.bench_function("step_parallel_512x512", |b| {
        b.iter(|| step_parallel(black_box(&grid), &params));
    });
}

criterion_group!(benches, bench_step_sequential, bench_step_large);
criterion_main!(benches);
