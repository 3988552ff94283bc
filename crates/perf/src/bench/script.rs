//! Dynamic-value strategies.

use crate::report::Report;
use crate::utils::*;
use siftmap_script::{filter_map, Function, Value};

const SIZE: usize = 100_000;

fn make_values(count: usize) -> Vec<Value> {
    make_records(count)
        .into_iter()
        .map(|r| {
            Value::object([
                ("id", Value::from(r.id as f64)),
                ("value", Value::from(r.value)),
            ])
        })
        .collect()
}

pub fn run(report: &mut Report) {
    println!("  {} dynamic values:", format_size(SIZE));
    let cutoff = cutoff(SIZE) as f64;
    let source = make_values(SIZE);

    let predicate: Value = Function::new("aboveCutoff", 1, move |v| {
        let id = v.element().property("id").as_f64().unwrap_or(0.0);
        Ok(Value::Bool(id > cutoff))
    })
    .into();
    let transform: Value =
        Function::new("value", 1, |v| Ok(v.element().property("value"))).into();

    let result = measure_with_setup(
        ITERATIONS,
        || source.clone(),
        |mut values: Vec<Value>| filter_map(&mut values, &predicate, &transform, None),
    );
    print_and_add(report, "script_filter_map", result);

    let result = measure(ITERATIONS, || {
        source
            .iter()
            .filter(|v| v.property("id").as_f64().map_or(false, |id| id > cutoff))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|v| v.property("value"))
            .collect::<Vec<_>>()
    });
    print_and_add(report, "script_filter_then_map", result);
}

fn print_and_add(report: &mut Report, strategy: &'static str, result: BenchResult) {
    println!(
        "    {:<22} {:>10} ({:>14})",
        strategy,
        format_duration(result.mean),
        format_throughput(result.throughput(SIZE))
    );
    report.add(strategy, SIZE, result);
}
