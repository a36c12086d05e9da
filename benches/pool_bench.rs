//! Throughput benchmarks for the pool operation.
//!
//! Benchmarks cover:
//! - Admission-gated fan-out at several caps
//! - The unbounded (all-at-once) path

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime;

use fanout_pool::pool;

const ITEMS: usize = 512;

fn bench_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("fanout");
    // A cap of zero exercises the unbounded path.
    for cap in [1usize, 4, 32, 0] {
        group.throughput(Throughput::Elements(ITEMS as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cap), &cap, |b, &cap| {
            b.to_async(Runtime::new().unwrap()).iter(|| async move {
                let results = pool(0..ITEMS, cap, |n: usize, _: usize| async move {
                    Ok::<usize, String>(n.wrapping_mul(31))
                })
                .await
                .unwrap();
                black_box(results)
            });
        });
    }
    group.finish();
}

fn bench_yielding_tasks(c: &mut Criterion) {
    let mut group = c.benchmark_group("fanout_yielding");
    for cap in [4usize, 32] {
        group.throughput(Throughput::Elements(ITEMS as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cap), &cap, |b, &cap| {
            b.to_async(Runtime::new().unwrap()).iter(|| async move {
                let results = pool(0..ITEMS, cap, |n: usize, _: usize| async move {
                    tokio::task::yield_now().await;
                    Ok::<usize, String>(n + 1)
                })
                .await
                .unwrap();
                black_box(results)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fanout, bench_yielding_tasks);
criterion_main!(benches);
