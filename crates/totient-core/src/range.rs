//! Inclusive integer ranges and their partitioning into worker chunks.

use serde::Serialize;

use crate::calculator::TotientError;

/// Inclusive range `[lower, upper]`. A reversed range (`lower > upper`) is
/// empty rather than invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub lower: i64,
    pub upper: i64,
}

impl Range {
    #[must_use]
    pub const fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    /// Whether the range contains no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lower > self.upper
    }

    /// Number of values in the range.
    #[must_use]
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.upper.abs_diff(self.lower).saturating_add(1)
        }
    }

    /// Check that every value in the range is a valid totient argument.
    pub fn validate(&self) -> Result<(), TotientError> {
        if !self.is_empty() && self.lower < 1 {
            return Err(TotientError::InvalidInput(format!(
                "range [{}..{}] contains values below 1",
                self.lower, self.upper
            )));
        }
        Ok(())
    }

    /// Split the range into at most `workers` contiguous chunks.
    ///
    /// Chunk sizes differ by at most one, the larger chunks come first, and
    /// the chunks tile the range exactly in ascending order. A range with
    /// fewer values than `workers` yields one chunk per value; an empty range
    /// yields no chunks. `workers == 0` is treated as one worker.
    #[must_use]
    pub fn partition(&self, workers: usize) -> Vec<Chunk> {
        if self.is_empty() {
            return Vec::new();
        }

        // u128 so that the full i64 span (2^64 values) is exact
        let len = u128::from(self.upper.abs_diff(self.lower)) + 1;
        let workers = workers.max(1);
        let count = usize::try_from(len).map_or(workers, |len| len.min(workers));
        let base = len / count as u128;
        let extra = len % count as u128;

        let mut chunks = Vec::with_capacity(count);
        let mut start = self.lower;
        for index in 0..count {
            let size = base + u128::from((index as u128) < extra);
            let end = start.saturating_add_unsigned(u64::try_from(size - 1).unwrap_or(u64::MAX));
            chunks.push(Chunk { index, start, end });
            start = end.saturating_add(1);
        }
        chunks
    }
}

/// Contiguous sub-range assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Position of the chunk within its parent range.
    pub index: usize,
    pub start: i64,
    pub end: i64,
}

impl Chunk {
    /// The chunk as a standalone range.
    #[must_use]
    pub const fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.range().len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.range().is_empty()
    }
}
