//! Backend Comparison Benchmark
//!
//! Compares the runtime dispatcher against explicit AES-NI and portable
//! kernels, stage by stage and end to end.

#![allow(missing_docs)]
#![allow(unsafe_code)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion};
use cryptonight::kernels::block::Block;
use cryptonight::kernels::portable;
use cryptonight::{hash_with, sponge, Backend, Config, Context};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("CryptoNight Backends");
    group.sample_size(20);

    let input = [0x5Au8; 76];
    let auto = Config::default();
    let mut ctx = Context::new(auto.params());

    // 1. Dispatcher (Production Path)
    group.bench_function(format!("Auto ({})", auto.backend()), |b| {
        b.iter(|| hash_with(black_box(&input), &mut ctx, &auto));
    });

    // 2. AES-NI with and without scratchpad prefetch
    if let Ok(hard) = Config::default().with_backend(Backend::AesNi) {
        group.bench_function("AES-NI (prefetch)", |b| {
            b.iter(|| hash_with(black_box(&input), &mut ctx, &hard));
        });
        let hard = hard.with_prefetch(false);
        group.bench_function("AES-NI (no prefetch)", |b| {
            b.iter(|| hash_with(black_box(&input), &mut ctx, &hard));
        });
    }

    // 3. Portable - table-driven AES baseline
    let soft = Config::default().with_backend(Backend::Portable).unwrap();
    group.bench_function("Portable", |b| {
        b.iter(|| hash_with(black_box(&input), &mut ctx, &soft));
    });

    group.finish();
}

/// Explode alone: the AES-heavy, mixing-free part of the core.
fn bench_explode(c: &mut Criterion) {
    let mut group = c.benchmark_group("Explode (2 MiB)");

    let state = sponge::absorb(b"explode");
    let mut pad = vec![Block::zero(); Config::default().params().memory() / 16];

    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("aes") {
            group.bench_function("AES-NI Native", |b| {
                b.iter(|| unsafe {
                    cryptonight::kernels::aesni::explode(black_box(&state), &mut pad, true);
                });
            });
        }
    }

    group.bench_function("Portable", |b| {
        b.iter(|| portable::explode(black_box(&state), &mut pad));
    });

    group.finish();
}

criterion_group!(benches, bench_backends, bench_explode);
criterion_main!(benches);
