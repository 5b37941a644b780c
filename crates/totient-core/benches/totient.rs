//! Criterion benchmarks for the sequential and parallel strategies.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use totient_core::calculator::Calculator;
use totient_core::parallel::ParallelCalculator;
use totient_core::range::Range;
use totient_core::sequential::SequentialCalculator;

fn bench_strategies(c: &mut Criterion) {
    let sequential: Arc<dyn Calculator> = Arc::new(SequentialCalculator::new());
    let parallel: Arc<dyn Calculator> = Arc::new(ParallelCalculator::new());

    let uppers: Vec<i64> = vec![1_000, 10_000, 100_000];

    for calc in [&sequential, &parallel] {
        let mut group = c.benchmark_group(calc.name().to_string());
        for &upper in &uppers {
            let range = Range::new(1, upper);
            group.bench_with_input(BenchmarkId::from_parameter(upper), &range, |b, range| {
                b.iter(|| calc.compute(range).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_worker_counts(c: &mut Criterion) {
    let range = Range::new(1, 50_000);
    let mut group = c.benchmark_group("ParallelWorkers");
    for workers in [1usize, 2, 4, 8] {
        let calc = ParallelCalculator::with_workers(workers);
        group.bench_with_input(BenchmarkId::from_parameter(workers), &range, |b, range| {
            b.iter(|| calc.compute(range).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_worker_counts);
criterion_main!(benches);
