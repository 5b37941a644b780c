//! # totient-bench
//!
//! Timed single and repeated runs of a bound calculator, and the statistics
//! reported over their samples.

pub mod interfaces;
pub mod runner;
pub mod stats;

pub use interfaces::ReportPresenter;
pub use runner::{BenchmarkReport, BenchmarkRunner, RunOutcome};
pub use stats::{Statistics, TimingSample};
