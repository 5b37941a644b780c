//! # totient-core
//!
//! Core library for the totient range benchmark.
//! Implements Euler's totient function and the sequential and parallel
//! strategies for summing it over an inclusive integer range.

pub mod calculator;
pub(crate) mod common;
pub mod constants;
pub mod options;
pub mod parallel;
pub mod range;
pub mod registry;
pub mod sequential;
pub mod totient;

// Re-exports
pub use calculator::{Calculator, TotientError};
pub use constants::{exit_codes, DEFAULT_LOWER, DEFAULT_RUNS, DEFAULT_UPPER};
pub use options::ParallelOptions;
pub use parallel::ParallelCalculator;
pub use range::{Chunk, Range};
pub use registry::{CalculatorFactory, DefaultFactory};
pub use sequential::SequentialCalculator;
pub use totient::{totient, totient_by_gcd};

/// Sum φ(n) over `[lower, upper]` with the sequential strategy.
///
/// This is a convenience function for simple use cases. To pick a strategy
/// or time the computation, use the `Calculator` trait directly.
///
/// # Example
/// ```
/// assert_eq!(totient_core::totient_sum(1, 10).unwrap(), 32);
/// assert_eq!(totient_core::totient_sum(5, 1).unwrap(), 0);
/// ```
pub fn totient_sum(lower: i64, upper: i64) -> Result<u64, TotientError> {
    SequentialCalculator::new().compute(&Range::new(lower, upper))
}
