//! Siftmap performance comparison.
//!
//! Run with: cargo run -p siftmap-perf --release
//!
//! Set `RUST_LOG` to change the log filter (default `info`).

mod bench;
mod report;
mod utils;

use bench::strategy::{FILTER_THEN_MAP, SIFT};
use report::Report;
use tracing_subscriber::EnvFilter;
use utils::LARGE;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() {
    init_tracing();
    tracing::info!(iterations = utils::ITERATIONS, "starting filter-map comparison");

    let mut report = Report::new();

    println!("Typed strategies:");
    bench::strategy::run(&mut report);
    println!();

    println!("Dynamic values:");
    bench::script::run(&mut report);
    println!();

    report.print_summary(SIFT, FILTER_THEN_MAP);

    match report.ratio(LARGE, SIFT, FILTER_THEN_MAP) {
        Some(ratio) if ratio > 1.0 => tracing::warn!(
            ratio,
            "single pass slower than filter-then-map on the large dataset"
        ),
        Some(ratio) => tracing::info!(ratio, "single pass vs filter-then-map on the large dataset"),
        None => tracing::warn!("large dataset comparison missing"),
    }
}
