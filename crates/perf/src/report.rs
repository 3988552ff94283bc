//! Comparison report.

use crate::utils::{format_duration, format_size, format_throughput, BenchResult};
use std::collections::BTreeMap;

/// One measured strategy at one dataset size.
#[derive(Clone)]
pub struct Entry {
    pub strategy: &'static str,
    pub size: usize,
    pub result: BenchResult,
}

/// Measurements grouped by dataset size.
#[derive(Default)]
pub struct Report {
    by_size: BTreeMap<usize, Vec<Entry>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, strategy: &'static str, size: usize, result: BenchResult) {
        self.by_size.entry(size).or_default().push(Entry {
            strategy,
            size,
            result,
        });
    }

    /// Mean time of `strategy` relative to `baseline` at `size`.
    ///
    /// Below 1.0 means `strategy` is faster.
    pub fn ratio(&self, size: usize, strategy: &str, baseline: &str) -> Option<f64> {
        let entries = self.by_size.get(&size)?;
        let find = |name: &str| {
            entries
                .iter()
                .find(|e| e.strategy == name)
                .map(|e| e.result.mean.as_secs_f64())
        };
        let (s, b) = (find(strategy)?, find(baseline)?);
        if b == 0.0 {
            return None;
        }
        Some(s / b)
    }

    pub fn print_summary(&self, subject: &str, baseline: &str) {
        println!("╔══════════════════════════════════════════════════════════════════╗");
        println!("║                      FILTER-MAP COMPARISON                       ║");
        println!("╚══════════════════════════════════════════════════════════════════╝\n");

        for (&size, entries) in &self.by_size {
            println!("┌─ {} records ─", format_size(size));
            for entry in entries {
                println!(
                    "│ {:<22}: {:>12}  (median {:>10}, {})",
                    entry.strategy,
                    format_duration(entry.result.mean),
                    format_duration(entry.result.median),
                    format_throughput(entry.result.throughput(entry.size)),
                );
            }
            if let Some(ratio) = self.ratio(size, subject, baseline) {
                println!("│ {} / {} = {:.2}x", subject, baseline, ratio);
            }
            println!("└─");
            println!();
        }
    }
}
