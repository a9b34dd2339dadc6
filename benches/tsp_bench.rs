//! Criterion benchmarks for the exact and nearest-neighbor solvers.
//!
//! Instances come from the seeded generator so every run measures the same
//! cities.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::exact::{ExactConfig, ExactRunner};
use u_tsp::instance::{generate, InstanceConfig};
use u_tsp::map::Map;
use u_tsp::nearest::NearestNeighborRunner;

fn instance(n: usize) -> Map {
    let cities = generate(&InstanceConfig::default().with_cities(n).with_seed(42))
        .expect("valid instance config");
    Map::build(cities).expect("generated cities are finite")
}

fn bench_map_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_build");

    for &n in &[10, 100, 500] {
        let cities = generate(&InstanceConfig::default().with_cities(n))
            .expect("valid instance config");
        group.bench_with_input(BenchmarkId::from_parameter(n), &cities, |b, cities| {
            b.iter(|| {
                let map = Map::build(black_box(cities.clone()));
                black_box(map)
            })
        });
    }
    group.finish();
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    group.sample_size(10);

    for &n in &[6, 8, 10] {
        let map = instance(n);
        let config = ExactConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(map, config), |b, (m, c)| {
            b.iter(|| {
                let result = ExactRunner::run(black_box(m), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_nearest_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor");

    for &n in &[10, 100, 1000] {
        let map = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &map, |b, m| {
            b.iter(|| {
                let run = NearestNeighborRunner::run(black_box(m));
                black_box(run)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_map_build, bench_exact, bench_nearest_neighbor);
criterion_main!(benches);
