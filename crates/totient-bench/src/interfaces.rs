//! Presentation interface for benchmark results.

use crate::runner::{BenchmarkReport, RunOutcome};

/// Trait for presenting results to the user.
pub trait ReportPresenter: Send + Sync {
    /// Present the outcome of a single run.
    fn present_run(&self, outcome: &RunOutcome);

    /// Present the statistics of a repeated run.
    fn present_report(&self, report: &BenchmarkReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use parking_lot::Mutex;

    use totient_core::sequential::SequentialCalculator;

    use crate::runner::BenchmarkRunner;

    /// Records what it was asked to present.
    #[derive(Default)]
    struct RecordingPresenter {
        lines: Mutex<Vec<String>>,
    }

    impl ReportPresenter for RecordingPresenter {
        fn present_run(&self, outcome: &RunOutcome) {
            self.lines.lock().push(format!("run {}", outcome.sum));
        }

        fn present_report(&self, report: &BenchmarkReport) {
            self.lines
                .lock()
                .push(format!("report {} x{}", report.sum, report.statistics.count));
        }

        fn present_error(&self, error: &str) {
            self.lines.lock().push(format!("error {error}"));
        }
    }

    #[test]
    fn presenter_receives_results() {
        let runner = BenchmarkRunner::new(Arc::new(SequentialCalculator::new()));
        let presenter = RecordingPresenter::default();

        presenter.present_run(&runner.run(1, 10).unwrap());
        presenter.present_report(&runner.run_n(1, 10, 3).unwrap());
        if let Err(e) = runner.run_n(1, 10, 0) {
            presenter.present_error(&e.to_string());
        }

        let lines = presenter.lines.lock();
        assert_eq!(lines[0], "run 32");
        assert_eq!(lines[1], "report 32 x3");
        assert!(lines[2].starts_with("error invalid input"));
    }
}
