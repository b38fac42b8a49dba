//! Benchmark for gatherer stages and the sequence facade.
//!
//! Measures the cost of the stage contract against hand-rolled loops over
//! the same data.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use disjunct::gather::{GatherExt, until_err};
use disjunct::seq::IntoOutcomes;
use disjunct::union::Outcome;
use std::hint::black_box;

fn sample(len: usize, err_at: usize) -> Vec<Outcome<u64, String>> {
    (0..len)
        .map(|index| {
            if index == err_at {
                Outcome::Err(format!("failed at {index}"))
            } else {
                Outcome::Ok(index as u64)
            }
        })
        .collect()
}

// =============================================================================
// Short-circuit Benchmarks
// =============================================================================

fn benchmark_until_err(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("until_err");

    for err_at in [100usize, 1_000, 10_000] {
        let elements = sample(10_000, err_at);

        group.bench_with_input(
            BenchmarkId::new("gathered", err_at),
            &elements,
            |bencher, elements| {
                bencher.iter(|| {
                    let gathered: Vec<_> = elements
                        .iter()
                        .cloned()
                        .gather(until_err())
                        .collect();
                    black_box(gathered.len())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hand_rolled", err_at),
            &elements,
            |bencher, elements| {
                bencher.iter(|| {
                    let mut prefix = Vec::new();
                    for element in elements {
                        let is_err = element.is_err();
                        prefix.push(element.clone());
                        if is_err {
                            break;
                        }
                    }
                    black_box(prefix.len())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_stage_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stage_pipeline");
    let elements = sample(10_000, 9_999);

    group.bench_function("facade_chain", |bencher| {
        bencher.iter(|| {
            let total: u64 = elements
                .iter()
                .cloned()
                .outcomes()
                .filter_ok(|n| n % 2 == 0)
                .map_ok(|n| n * 3)
                .oks()
                .sum();
            black_box(total)
        });
    });

    group.bench_function("iterator_chain", |bencher| {
        bencher.iter(|| {
            let total: u64 = elements
                .iter()
                .cloned()
                .filter_map(|element| element.ok())
                .filter(|n| n % 2 == 0)
                .map(|n| n * 3)
                .sum();
            black_box(total)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_until_err, benchmark_stage_pipeline);
criterion_main!(benches);
