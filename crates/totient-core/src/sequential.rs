//! Single-threaded calculator: the correctness baseline.

use crate::calculator::{Calculator, TotientError};
use crate::range::Range;
use crate::totient::totient_unchecked;

/// Sums φ(n) by walking the range in increasing order on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialCalculator;

impl SequentialCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for SequentialCalculator {
    fn compute(&self, range: &Range) -> Result<u64, TotientError> {
        range.validate()?;
        sum_totients(range)
    }

    fn name(&self) -> &str {
        "Sequential"
    }
}

/// Sum φ(n) over an already-validated range.
pub(crate) fn sum_totients(range: &Range) -> Result<u64, TotientError> {
    if range.is_empty() {
        return Ok(0);
    }
    (range.lower..=range.upper).try_fold(0u64, |acc, n| {
        acc.checked_add(totient_unchecked(n))
            .ok_or(TotientError::Overflow {
                lower: range.lower,
                upper: range.upper,
            })
    })
}
