//! Parallel strategy options.

use crate::common::default_parallelism;

/// Options for the parallel calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParallelOptions {
    /// Number of concurrent workers (0 = hardware concurrency).
    pub workers: usize,
}

impl ParallelOptions {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.workers == 0 {
            self.workers = default_parallelism();
        }
        self
    }
}
