//! Timing helpers and dataset generation.

use std::time::{Duration, Instant};

/// Measured iterations per strategy.
pub const ITERATIONS: usize = 20;

/// Warmup iterations before measurement.
pub const WARMUP_ITERATIONS: usize = 3;

/// Dataset size of the headline comparison.
pub const LARGE: usize = 1_000_000;

/// Sizes for the scaling sweep.
pub const SIZES: [usize; 4] = [1_000, 10_000, 100_000, LARGE];

/// Records with `id` above this fraction of the dataset are kept.
pub const CUTOFF_RATIO: f64 = 0.3;

/// A record shaped like the usual `{ id, value }` benchmark payload.
#[derive(Clone)]
pub struct Record {
    pub id: u64,
    pub value: String,
}

pub fn make_records(count: usize) -> Vec<Record> {
    (0..count as u64)
        .map(|id| Record {
            id,
            value: format!("test {}", id),
        })
        .collect()
}

pub fn cutoff(count: usize) -> u64 {
    (count as f64 * CUTOFF_RATIO) as u64
}

/// Measure with setup excluded from timing (includes warmup).
pub fn measure_with_setup<S, F, T, R>(iterations: usize, mut setup: S, mut f: F) -> BenchResult
where
    S: FnMut() -> T,
    F: FnMut(T) -> R,
{
    for _ in 0..WARMUP_ITERATIONS {
        let data = setup();
        std::hint::black_box(f(data));
    }

    let mut times = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let data = setup();
        let start = Instant::now();
        std::hint::black_box(f(data));
        times.push(start.elapsed());
    }

    BenchResult::from_times(&times)
}

/// Measure a closure over borrowed data (includes warmup).
pub fn measure<F, R>(iterations: usize, mut f: F) -> BenchResult
where
    F: FnMut() -> R,
{
    measure_with_setup(iterations, || (), |()| f())
}

#[derive(Clone, Debug)]
#[allow(dead_code)]
pub struct BenchResult {
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub median: Duration,
    pub iterations: usize,
}

impl BenchResult {
    /// Summarises raw timings. An empty slice yields all-zero durations.
    pub fn from_times(times: &[Duration]) -> Self {
        let mut sorted = times.to_vec();
        sorted.sort();

        let min = sorted.first().copied().unwrap_or_default();
        let max = sorted.last().copied().unwrap_or_default();
        let mean = if sorted.is_empty() {
            Duration::ZERO
        } else {
            sorted.iter().sum::<Duration>() / sorted.len() as u32
        };
        let median = sorted.get(sorted.len() / 2).copied().unwrap_or_default();

        Self {
            min,
            max,
            mean,
            median,
            iterations: times.len(),
        }
    }

    pub fn throughput(&self, count: usize) -> f64 {
        let secs = self.mean.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        count as f64 / secs
    }
}

/// Format duration for display
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2} μs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", nanos as f64 / 1_000_000_000.0)
    }
}

/// Format throughput for display
pub fn format_throughput(elems_per_sec: f64) -> String {
    if elems_per_sec >= 1_000_000.0 {
        format!("{:.2}M elem/s", elems_per_sec / 1_000_000.0)
    } else if elems_per_sec >= 1_000.0 {
        format!("{:.2}K elem/s", elems_per_sec / 1_000.0)
    } else {
        format!("{:.2} elem/s", elems_per_sec)
    }
}

pub fn format_size(size: usize) -> String {
    if size >= 1_000_000 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 {
        format!("{}K", size / 1_000)
    } else {
        format!("{}", size)
    }
}
