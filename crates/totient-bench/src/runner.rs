//! Benchmark runner: timed single and repeated runs of one calculator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use totient_core::calculator::{Calculator, TotientError};
use totient_core::range::Range;

use crate::stats::{Statistics, TimingSample};

/// Times `compute` calls on a single calculator bound at construction.
///
/// Runs are strictly sequential: a trial starts only after the previous one
/// has returned, so trials never compete for cores.
pub struct BenchmarkRunner {
    calculator: Arc<dyn Calculator>,
}

impl BenchmarkRunner {
    #[must_use]
    pub fn new(calculator: Arc<dyn Calculator>) -> Self {
        Self { calculator }
    }

    /// Name of the bound calculator.
    #[must_use]
    pub fn calculator_name(&self) -> &str {
        self.calculator.name()
    }

    /// Time exactly one `compute` over `[lower, upper]`.
    pub fn run(&self, lower: i64, upper: i64) -> Result<RunOutcome, TotientError> {
        let range = Range::new(lower, upper);
        let (sum, sample) = self.timed_compute(&range, 0, None)?;

        info!(
            calculator = self.calculator_name(),
            lower,
            upper,
            sum,
            elapsed = ?sample.duration,
            "run complete"
        );

        Ok(RunOutcome {
            calculator: self.calculator_name().to_string(),
            range,
            sum,
            duration: sample.duration,
        })
    }

    /// Time `runs` identical `compute` calls over `[lower, upper]`.
    ///
    /// Every trial's sum is checked against the first one; the check is part
    /// of the trial's timed interval. The first divergence aborts with
    /// `TotientError::NonDeterministic`, and any calculator error aborts the
    /// whole call.
    pub fn run_n(&self, lower: i64, upper: i64, runs: u32) -> Result<BenchmarkReport, TotientError> {
        if runs == 0 {
            return Err(TotientError::InvalidInput(
                "number of runs must be at least 1".into(),
            ));
        }

        let range = Range::new(lower, upper);
        let mut samples = Vec::with_capacity(runs as usize);

        let (sum, first) = self.timed_compute(&range, 0, None)?;
        samples.push(first);
        for iteration in 1..runs {
            let (_, sample) = self.timed_compute(&range, iteration, Some(sum))?;
            samples.push(sample);
        }

        let statistics = Statistics::from_samples(&samples).ok_or_else(|| {
            TotientError::InvalidInput("no timing samples recorded".into())
        })?;

        info!(
            calculator = self.calculator_name(),
            lower,
            upper,
            sum,
            runs,
            mean = ?statistics.mean,
            "benchmark complete"
        );

        Ok(BenchmarkReport {
            calculator: self.calculator_name().to_string(),
            range,
            sum,
            statistics,
            samples,
        })
    }

    fn timed_compute(
        &self,
        range: &Range,
        iteration: u32,
        expected: Option<u64>,
    ) -> Result<(u64, TimingSample), TotientError> {
        let start = Instant::now();
        let sum = self.calculator.compute(range)?;
        if let Some(expected) = expected {
            if sum != expected {
                warn!(iteration, expected, actual = sum, "sum diverged from first run");
                return Err(TotientError::NonDeterministic {
                    iteration: iteration + 1,
                    expected,
                    actual: sum,
                });
            }
        }
        let duration = start.elapsed();

        debug!(iteration, ?duration, "trial finished");
        Ok((sum, TimingSample { iteration, duration }))
    }
}

/// Result of a single timed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    pub calculator: String,
    pub range: Range,
    pub sum: u64,
    #[serde(rename = "seconds", serialize_with = "crate::stats::as_secs_f64")]
    pub duration: Duration,
}

/// Statistics over the samples of one `run_n` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub calculator: String,
    pub range: Range,
    /// The sum every trial agreed on.
    pub sum: u64,
    pub statistics: Statistics,
    pub samples: Vec<TimingSample>,
}
