//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use totient_bench::interfaces::ReportPresenter;
use totient_bench::runner::BenchmarkRunner;
use totient_cli::output::write_json;
use totient_cli::presenter::CliReportPresenter;
use totient_core::registry::{CalculatorFactory, DefaultFactory};

use crate::config::AppConfig;

/// Run the application.
///
/// Errors are presented to the user before being returned, so the caller
/// only has to pick an exit code.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        totient_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter = CliReportPresenter::new(config.verbose, config.quiet, config.json);
    let result = run_benchmark(config, &presenter);
    if let Err(err) = &result {
        presenter.present_error(&format!("{err:#}"));
    }
    result
}

fn run_benchmark(config: &AppConfig, presenter: &dyn ReportPresenter) -> Result<()> {
    // Resolve the mode before any timing starts
    let factory = DefaultFactory::with_options(config.parallel_options());
    let calculator = factory.get(&config.mode)?;
    let runner = BenchmarkRunner::new(calculator);

    debug!(
        mode = %config.mode,
        calculator = runner.calculator_name(),
        lower = config.lower,
        upper = config.upper,
        runs = config.runs,
        "starting benchmark"
    );

    if config.runs > 1 {
        let report = runner.run_n(config.lower, config.upper, config.runs)?;
        presenter.present_report(&report);
        if let Some(path) = &config.output {
            write_json(path, &report)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
    } else {
        let outcome = runner.run(config.lower, config.upper)?;
        presenter.present_run(&outcome);
        if let Some(path) = &config.output {
            write_json(path, &outcome)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
    }

    Ok(())
}
