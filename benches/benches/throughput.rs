//! CryptoNight Criterion Benchmark
//!
//! Hashes per second for the proof-of-work workload: a fixed-size header
//! hashed many times with a reused scratchpad.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use cryptonight::{Config, Context};
use rand::prelude::*;
use std::hint::black_box;

const HEADER: usize = 76;

fn random_headers(count: usize) -> Vec<Vec<u8>> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let mut header = vec![0u8; HEADER];
            rng.fill(&mut header[..]);
            header
        })
        .collect()
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Single-hash latency for each parameter set.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");
    group.sample_size(20);
    group.throughput(Throughput::Elements(1));

    let header = random_headers(1).remove(0);
    for (name, config) in [("cryptonight", Config::cryptonight()), ("lite", Config::lite())] {
        let mut ctx = Context::new(config.params());
        group.bench_function(name, |b| {
            b.iter(|| cryptonight::hash_with(black_box(&header), &mut ctx, &config))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: ALLOCATION
// =============================================================================

/// Cost of allocating a fresh scratchpad per call vs reusing a context.
fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Allocation");
    group.sample_size(20);
    group.throughput(Throughput::Elements(1));

    let header = random_headers(1).remove(0);
    group.bench_function("oneshot", |b| b.iter(|| cryptonight::hash(black_box(&header))));

    let config = Config::default();
    let mut ctx = Context::new(config.params());
    group.bench_function("reused-context", |b| {
        b.iter(|| cryptonight::hash_with(black_box(&header), &mut ctx, &config))
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 3: DOUBLE LANE
// =============================================================================

/// Two interleaved hashes vs two sequential ones.
fn bench_double_lane(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Double-Lane");
    group.sample_size(20);
    group.throughput(Throughput::Elements(2));

    let headers = random_headers(2);
    let config = Config::default();
    let mut c0 = Context::new(config.params());
    let mut c1 = Context::new(config.params());

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let a = cryptonight::hash_with(black_box(&headers[0]), &mut c0, &config);
            let b = cryptonight::hash_with(black_box(&headers[1]), &mut c1, &config);
            (a, b)
        })
    });

    group.bench_function("interleaved", |b| {
        b.iter(|| {
            cryptonight::double_hash(
                black_box(&headers[0]),
                black_box(&headers[1]),
                &mut c0,
                &mut c1,
                &config,
            )
        })
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 4: THREAD SCALING
// =============================================================================

/// Batch hashing across 1 to N Rayon threads.
#[cfg(feature = "multithread")]
fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Thread-Scaling");
    group.sample_size(10);

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    let config = Config::default();
    for threads in thread_counts {
        let headers = random_headers(threads * 2);
        group.throughput(Throughput::Elements(headers.len() as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{}threads", threads)),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| cryptonight::hash_batch(black_box(&headers), &config)));
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

#[cfg(feature = "multithread")]
criterion_group!(
    benches,
    bench_latency,
    bench_allocation,
    bench_double_lane,
    bench_thread_scaling
);

#[cfg(not(feature = "multithread"))]
criterion_group!(benches, bench_latency, bench_allocation, bench_double_lane);

criterion_main!(benches);
