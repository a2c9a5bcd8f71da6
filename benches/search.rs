//! Benchmarks for position search performance.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridport::{binary_search, exponential_search, MeasuredFrontier, RowPositions};

fn uniform_positions(count: usize, extent: f32) -> Vec<f32> {
    (0..count).map(|i| i as f32 * extent).collect()
}

/// Benchmark binary search across grid sizes
fn bench_binary_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search");
    for count in [1_000usize, 100_000, 1_000_000] {
        let positions = uniform_positions(count, 30.0);
        let offset = count as f32 * 30.0 * 0.6;
        group.bench_with_input(BenchmarkId::from_parameter(count), &positions, |b, p| {
            b.iter(|| binary_search(black_box(offset), black_box(p)));
        });
    }
    group.finish();
}

/// Benchmark exponential search seeded near and far from the target
fn bench_exponential_search(c: &mut Criterion) {
    let positions = uniform_positions(100_000, 30.0);
    let offset = 100_000.0 * 30.0 * 0.6;

    let mut group = c.benchmark_group("exponential_search");
    for start in [0usize, 30_000, 59_000] {
        group.bench_with_input(BenchmarkId::from_parameter(start), &start, |b, &s| {
            b.iter(|| exponential_search(black_box(offset), black_box(&positions), s));
        });
    }
    group.finish();
}

/// Benchmark the frontier-aware resolution policy end to end
fn bench_nearest_index(c: &mut Criterion) {
    let positions = uniform_positions(100_000, 30.0);
    let all_measured = RowPositions::new(positions.clone(), 3_000_000.0);
    let estimated = RowPositions::new(positions, 3_000_000.0)
        .with_frontier(MeasuredFrontier::Through(50_000));

    c.bench_function("nearest_index_measured", |b| {
        b.iter(|| all_measured.nearest_index(black_box(1_800_000.0)));
    });
    c.bench_function("nearest_index_estimated", |b| {
        b.iter(|| estimated.nearest_index(black_box(1_800_000.0)));
    });
}

criterion_group!(
    benches,
    bench_binary_search,
    bench_exponential_search,
    bench_nearest_index
);
criterion_main!(benches);
