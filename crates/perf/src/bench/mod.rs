//! Benchmark modules

pub mod script;
pub mod strategy;
