//! Benchmark for the container combinators: Maybe chains, Outcome
//! railway chains, and collect_all aggregation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sumrail::maybe::Maybe;
use sumrail::outcome::Outcome;

// =============================================================================
// Maybe Benchmarks
// =============================================================================

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    group.bench_function("map_filter_reduce", |bencher| {
        bencher.iter(|| {
            let value = Maybe::some(black_box(21))
                .map(|n| n * 2)
                .filter(|n| *n > 0)
                .reduce(0);
            black_box(value)
        });
    });

    group.bench_function("bind_chain", |bencher| {
        bencher.iter(|| {
            let value = Maybe::some(black_box(64))
                .bind(|n| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() })
                .bind(|n| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() })
                .reduce(0);
            black_box(value)
        });
    });

    group.finish();
}

// =============================================================================
// Outcome Benchmarks
// =============================================================================

fn benchmark_outcome_railway(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_railway");

    group.bench_function("bind_success_track", |bencher| {
        bencher.iter(|| {
            let value = Outcome::<i32, String>::ok(black_box(3))
                .bind(|n| Outcome::ok(n * 2))
                .map(|n| n + 1)
                .reduce(0);
            black_box(value)
        });
    });

    group.bench_function("bind_failure_track", |bencher| {
        bencher.iter(|| {
            let value = Outcome::<i32, String>::error(black_box("boom".to_string()))
                .bind(|n| Outcome::ok(n * 2))
                .map(|n| n + 1)
                .reduce(0);
            black_box(value)
        });
    });

    group.finish();
}

fn benchmark_collect_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collect_all");

    for size in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("all_success", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let entries = (0..size).map(Outcome::<i32, String>::ok);
                    black_box(Outcome::collect_all(entries))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("alternating_failures", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let entries = (0..size).map(|index| {
                        if index % 2 == 0 {
                            Outcome::<i32, String>::ok(index)
                        } else {
                            Outcome::error(format!("failure {index}"))
                        }
                    });
                    black_box(Outcome::collect_all(entries))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_maybe_chain,
    benchmark_outcome_railway,
    benchmark_collect_all
);
criterion_main!(benches);
