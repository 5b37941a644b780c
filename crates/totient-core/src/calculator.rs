//! The `Calculator` capability and the shared error type.
//!
//! `Calculator` is the trait consumed by the benchmark runner and the mode
//! registry. `SequentialCalculator` and `ParallelCalculator` implement it.

use crate::range::Range;

/// Error type for totient computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TotientError {
    /// Configuration error (unknown mode, bad settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// Input outside the domain of the totient function.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The aggregate sum does not fit in a `u64`.
    #[error("sum of totients over [{lower}..{upper}] overflows u64")]
    Overflow { lower: i64, upper: i64 },

    /// A concurrent chunk panicked or its pool could not be built; no partial
    /// sum is kept.
    #[error("worker for chunk {chunk} failed: {reason}")]
    WorkerFailure { chunk: usize, reason: String },

    /// A repeated trial produced a different sum than the first one.
    /// `iteration` is the 1-based run number of the diverging trial.
    #[error("non-deterministic result: run {iteration} returned {actual}, expected {expected}")]
    NonDeterministic {
        iteration: u32,
        expected: u64,
        actual: u64,
    },
}

/// Strategy for summing φ(n) over an inclusive range.
///
/// Implementations hold no mutable state between calls: every `compute` is
/// independent of the ones before it.
pub trait Calculator: Send + Sync {
    /// Sum φ(n) for every n in `range`. A reversed range sums to 0.
    fn compute(&self, range: &Range) -> Result<u64, TotientError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totient_error_display() {
        let err = TotientError::Config("unknown mode: fast".into());
        assert_eq!(err.to_string(), "configuration error: unknown mode: fast");

        let err = TotientError::WorkerFailure {
            chunk: 3,
            reason: "boom".into(),
        };
        assert_eq!(err.to_string(), "worker for chunk 3 failed: boom");
    }

    #[test]
    fn non_deterministic_display() {
        let err = TotientError::NonDeterministic {
            iteration: 2,
            expected: 32,
            actual: 31,
        };
        assert_eq!(
            err.to_string(),
            "non-deterministic result: run 2 returned 31, expected 32"
        );
    }

    #[test]
    fn overflow_display() {
        let err = TotientError::Overflow { lower: 1, upper: 9 };
        assert_eq!(err.to_string(), "sum of totients over [1..9] overflows u64");
    }
}
