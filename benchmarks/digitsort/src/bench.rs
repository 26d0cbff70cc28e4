//! Radix sort benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 1M elements)
//! - Key magnitude (number of digit passes)
//! - Skewed distributions (many small keys, few large ones)
//!
//! Each group compares `radix_sort` with `slice::sort_unstable`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digitsort::prelude::*;
use rand::prelude::*;
use rand_distr::{Exp, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform keys below `bound`.
fn generate_uniform(size: usize, bound: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(0, bound).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Heavy-tailed keys: mostly short, occasionally many digits long.
fn generate_exponential(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Exp::new(1e-4).unwrap();
    (0..size)
        .map(|_| dist.sample(&mut rng).min(u64::MAX as f64) as u64)
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        let data = generate_uniform(size, 1_000_000, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("radix_sort", size), &data, |b, data| {
            b.iter(|| radix_sort(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("sort_unstable", size), &data, |b, data| {
            b.iter(|| {
                let mut copy = black_box(data).clone();
                copy.sort_unstable();
                copy
            })
        });
    }

    group.finish();
}

fn bench_magnitude(c: &mut Criterion) {
    let mut group = c.benchmark_group("magnitude");
    let size = 100_000;
    group.throughput(Throughput::Elements(size as u64));

    for digits in [1_u32, 3, 6, 12, 19] {
        let data = generate_uniform(size, 10_u64.pow(digits), 7);

        group.bench_with_input(BenchmarkId::new("radix_sort", digits), &data, |b, data| {
            b.iter(|| radix_sort(black_box(data)))
        });
    }

    group.finish();
}

fn bench_skewed(c: &mut Criterion) {
    let mut group = c.benchmark_group("skewed");
    let size = 100_000;
    let data = generate_exponential(size, 99);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("radix_sort", |b| b.iter(|| radix_sort(black_box(&data))));
    group.bench_function("sort_unstable", |b| {
        b.iter(|| {
            let mut copy = black_box(&data).clone();
            copy.sort_unstable();
            copy
        })
    });

    group.finish();
}

criterion_group!(benches, bench_scalability, bench_magnitude, bench_skewed);
criterion_main!(benches);
