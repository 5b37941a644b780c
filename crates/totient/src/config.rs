//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use totient_core::constants::{DEFAULT_LOWER, DEFAULT_RUNS, DEFAULT_UPPER};
use totient_core::options::ParallelOptions;

/// Totient-rs: sum Euler's totient over a range, sequentially or in parallel, and time it.
#[derive(Parser, Debug)]
#[command(name = "totient", version, about)]
pub struct AppConfig {
    /// Execution mode: sequential (seq) or parallel (par).
    #[arg(short, long, default_value = "sequential")]
    pub mode: String,

    /// Lower bound of the range (inclusive).
    #[arg(short, long, default_value_t = DEFAULT_LOWER, allow_negative_numbers = true)]
    pub lower: i64,

    /// Upper bound of the range (inclusive).
    #[arg(short, long, default_value_t = DEFAULT_UPPER, allow_negative_numbers = true)]
    pub upper: i64,

    /// Number of timed runs; more than one reports statistics, anything
    /// else times a single run.
    #[arg(short, long, default_value_t = DEFAULT_RUNS, env = "NUM_RUNS")]
    pub runs: u32,

    /// Parallel worker count (0 = one per hardware thread).
    #[arg(short, long, default_value_t = 0, env = "TOTIENT_WORKERS")]
    pub workers: usize,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON result to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the sum).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (list every run).
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Options for the parallel calculator.
    #[must_use]
    pub fn parallel_options(&self) -> ParallelOptions {
        ParallelOptions {
            workers: self.workers,
        }
    }
}
