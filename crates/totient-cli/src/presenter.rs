//! CLI report presenter.

use tracing::error;

use totient_bench::interfaces::ReportPresenter;
use totient_bench::runner::{BenchmarkReport, RunOutcome};

use crate::output::{format_duration, format_number, render_json};
use crate::ui;

/// CLI report presenter.
pub struct CliReportPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CliReportPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }

    fn print_json<T: serde::Serialize>(&self, value: &T) {
        match render_json(value) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("failed to render JSON: {e}"),
        }
    }
}

impl ReportPresenter for CliReportPresenter {
    fn present_run(&self, outcome: &RunOutcome) {
        if self.json {
            self.print_json(outcome);
            return;
        }
        if self.quiet {
            println!("{}", outcome.sum);
            return;
        }

        ui::print_header(&format!("{} run", outcome.calculator));
        println!(
            "Sum of totients between [{}..{}] is {}",
            outcome.range.lower,
            outcome.range.upper,
            format_number(outcome.sum)
        );
        println!("Duration: {}", format_duration(outcome.duration));
    }

    fn present_report(&self, report: &BenchmarkReport) {
        if self.json {
            self.print_json(report);
            return;
        }
        if self.quiet {
            println!("{}", report.sum);
            return;
        }

        let stats = &report.statistics;
        ui::print_header(&format!("{} benchmark", report.calculator));
        println!(
            "Sum of totients between [{}..{}] is {}",
            report.range.lower,
            report.range.upper,
            format_number(report.sum)
        );
        println!("Runs: {}", stats.count);
        println!("Min: {}", format_duration(stats.min));
        println!("Max: {}", format_duration(stats.max));
        println!("Mean: {}", format_duration(stats.mean));
        println!("Median: {}", format_duration(stats.median));
        println!("Std dev: {}", format_duration(stats.std_dev));

        if self.verbose {
            println!("\nSamples:");
            println!("{:-<40}", "");
            for sample in &report.samples {
                println!(
                    "  #{:<6} {:>12}",
                    sample.iteration + 1,
                    format_duration(sample.duration)
                );
            }
        }
        ui::print_success(&format!("all {} runs agreed", stats.count));
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
