//! Benchmarks for siftmap-core.
//!
//! Compares the combined pass against filter-then-map and fold.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use siftmap_core::{element, filter_map, positional, FilterMap, FilterMapOptions, SiftExt, Visit};

#[derive(Clone)]
struct Record {
    id: u64,
    value: String,
}

fn make_records(count: usize) -> Vec<Record> {
    (0..count as u64)
        .map(|id| Record {
            id,
            value: format!("test {}", id),
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy");

    for size in [1_000usize, 10_000, 100_000] {
        let records = make_records(size);
        let cutoff = (size as u64 * 3) / 10;

        group.bench_with_input(BenchmarkId::new("sift", size), &records, |b, records| {
            b.iter(|| records.sift(|r| r.id > cutoff, |r| r.value.clone()))
        });

        group.bench_with_input(
            BenchmarkId::new("filter_map_callbacks", size),
            &records,
            |b, records| {
                let mut source = records.clone();
                b.iter(|| {
                    filter_map(
                        black_box(&mut source),
                        element(|r: &Record| r.id > cutoff),
                        element(|r: &Record| r.value.clone()),
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("filter_then_map", size),
            &records,
            |b, records| {
                b.iter(|| {
                    let kept: Vec<&Record> = black_box(records)
                        .iter()
                        .filter(|r| r.id > cutoff)
                        .collect();
                    kept.into_iter().map(|r| r.value.clone()).collect::<Vec<_>>()
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("fold", size), &records, |b, records| {
            b.iter(|| {
                black_box(records).iter().fold(Vec::new(), |mut acc, r| {
                    if r.id > cutoff {
                        acc.push(r.value.clone());
                    }
                    acc
                })
            })
        });
    }

    group.finish();
}

fn bench_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("options");
    let size = 100_000;

    for (name, presize) in [("grow", false), ("presize", true)] {
        let mut source: Vec<u64> = (0..size).collect();
        group.bench_function(name, |b| {
            b.iter(|| {
                FilterMap::new()
                    .options(FilterMapOptions::new().with_presize(presize))
                    .run(
                        black_box(&mut source),
                        element(|x: &u64| x % 2 == 0),
                        element(|x: &u64| x * 2),
                    )
            })
        });
    }

    // Advisory disabled so the tracing call stays out of the loop timing.
    let mut source: Vec<u64> = (0..size).collect();
    group.bench_function("positional", |b| {
        b.iter(|| {
            FilterMap::new()
                .options(FilterMapOptions::new().with_advisory(false))
                .run(
                    black_box(&mut source),
                    positional(|v: &mut Visit<'_, u64>| v.index() % 2 == 0),
                    positional(|v: &mut Visit<'_, u64>| *v.element() * 2),
                )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_options);
criterion_main!(benches);
