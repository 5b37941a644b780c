//! Work-partitioned calculator.
//!
//! The range is split into at most `workers` contiguous chunks of near-equal
//! size. Each chunk is summed sequentially on its own worker and the partial
//! sums are folded with a checked addition. Addition is commutative and
//! associative, so the result does not depend on which worker finishes first
//! and workers never touch shared state.

use tracing::debug;

use crate::calculator::{Calculator, TotientError};
use crate::common::execute_chunks;
use crate::options::ParallelOptions;
use crate::range::{Chunk, Range};
use crate::sequential::sum_totients;

/// Fork/join calculator over a per-call rayon pool.
#[derive(Debug, Clone, Copy)]
pub struct ParallelCalculator {
    workers: usize,
}

impl ParallelCalculator {
    /// Create a calculator using one worker per hardware thread.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ParallelOptions::default())
    }

    /// Create a calculator with a fixed worker count (0 = hardware default).
    #[must_use]
    pub fn with_workers(workers: usize) -> Self {
        Self::with_options(ParallelOptions { workers })
    }

    #[must_use]
    pub fn with_options(opts: ParallelOptions) -> Self {
        Self {
            workers: opts.normalize().workers,
        }
    }

    /// Configured upper bound on concurrent workers.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Chunks that `compute` would dispatch for `range`, one per worker.
    #[must_use]
    pub fn plan(&self, range: &Range) -> Vec<Chunk> {
        range.partition(self.workers)
    }
}

impl Default for ParallelCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for ParallelCalculator {
    fn compute(&self, range: &Range) -> Result<u64, TotientError> {
        range.validate()?;

        let chunks = self.plan(range);
        debug!(
            lower = range.lower,
            upper = range.upper,
            chunks = chunks.len(),
            max_workers = self.workers,
            "partitioned range"
        );

        let partials = execute_chunks(&chunks, |chunk| sum_totients(&chunk.range()))?;

        partials
            .into_iter()
            .try_fold(0u64, u64::checked_add)
            .ok_or(TotientError::Overflow {
                lower: range.lower,
                upper: range.upper,
            })
    }

    fn name(&self) -> &str {
        "Parallel"
    }
}
