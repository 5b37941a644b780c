//! Constants for range defaults and process exit codes.

/// Default lower bound of the summed range.
pub const DEFAULT_LOWER: i64 = 1;

/// Default upper bound of the summed range.
pub const DEFAULT_UPPER: i64 = 1000;

/// Default number of timed runs.
pub const DEFAULT_RUNS: u32 = 1;

/// Worker count used when the hardware concurrency cannot be queried.
pub const FALLBACK_PARALLELISM: usize = 4;

/// Exit codes reported by the binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Repeated runs returned different sums.
    pub const ERROR_NON_DETERMINISTIC: i32 = 3;
    /// Invalid configuration (e.g. unknown mode).
    pub const ERROR_CONFIG: i32 = 4;
    /// A parallel worker failed.
    pub const ERROR_WORKER: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_forward() {
        assert!(DEFAULT_LOWER <= DEFAULT_UPPER);
        assert!(DEFAULT_LOWER >= 1);
    }

    #[test]
    fn exit_codes_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_NON_DETERMINISTIC,
            exit_codes::ERROR_CONFIG,
            exit_codes::ERROR_WORKER,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
