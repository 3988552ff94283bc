//! Typed strategies over `{ id, value }` records.

use crate::report::Report;
use crate::utils::*;
use siftmap_core::{element, filter_map, filter_map_owned, SiftExt};

pub const SIFT: &str = "sift";
pub const FILTER_THEN_MAP: &str = "filter_then_map";

pub fn run(report: &mut Report) {
    for &size in &SIZES {
        println!("  {} records:", format_size(size));
        let records = make_records(size);
        let cutoff = cutoff(size);

        record(report, SIFT, size, measure(ITERATIONS, || {
            records.sift(|r| r.id > cutoff, |r| r.value.clone())
        }));

        let mut source = records.clone();
        record(report, "filter_map_callbacks", size, measure(ITERATIONS, || {
            filter_map(
                &mut source,
                element(|r: &Record| r.id > cutoff),
                element(|r: &Record| r.value.clone()),
            )
        }));

        record(report, FILTER_THEN_MAP, size, measure(ITERATIONS, || {
            let kept: Vec<&Record> = records.iter().filter(|r| r.id > cutoff).collect();
            kept.into_iter().map(|r| r.value.clone()).collect::<Vec<_>>()
        }));

        record(report, "fold", size, measure(ITERATIONS, || {
            records.iter().fold(Vec::new(), |mut acc, r| {
                if r.id > cutoff {
                    acc.push(r.value.clone());
                }
                acc
            })
        }));

        record(report, "filter_map_owned", size, measure_with_setup(
            ITERATIONS,
            || records.clone(),
            |owned: Vec<Record>| filter_map_owned(owned, |r| r.id > cutoff, |r| r.value),
        ));
    }
}

fn record(report: &mut Report, strategy: &'static str, size: usize, result: BenchResult) {
    println!(
        "    {:<22} {:>10} ({:>14})",
        strategy,
        format_duration(result.mean),
        format_throughput(result.throughput(size))
    );
    report.add(strategy, size, result);
}
