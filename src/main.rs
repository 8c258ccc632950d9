use analytics::AnalyticsEngine;
use anyhow::{Context, Result};
use clap::Parser;
use configuration::{Config, ReportFormat, ShrinkLag, init_tracing, load_config};
use reporter::Reporter;
use std::path::PathBuf;

/// Retail performance analysis: sales, inventory, shrink and out-of-stock metrics
/// from a transactional CSV, plus a footfall → sales trend line.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to `retail.toml` if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input CSV, overriding `data.input_path`.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Which previous row expected inventory is computed from.
    #[arg(long, value_enum)]
    shrink_lag: Option<ShrinkLag>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
}

impl Cli {
    /// Applies command-line flags on top of the loaded configuration.
    fn apply_overrides(self, config: &mut Config) {
        if let Some(input) = self.input {
            config.data.input_path = input;
        }
        if let Some(lag) = self.shrink_lag {
            config.analysis.shrink_lag = lag;
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
    }
}

/// The main entry point for the retail analysis.
fn main() -> Result<()> {
    // Load RETAIL_* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();
    let _log_guard = init_tracing()?;

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    run(config)
}

/// Loader → derive → aggregate/fit → report, in one straight pass.
fn run(config: Config) -> Result<()> {
    let input = &config.data.input_path;
    tracing::info!(input = %input.display(), "Starting retail analysis.");

    let records = loader::load_transactions(input)
        .with_context(|| format!("Failed to load transactions from {}", input.display()))?;

    let engine = AnalyticsEngine::new(config.analysis);
    let rows = engine
        .derive(records)
        .context("Failed to derive row metrics")?;
    let report = engine
        .calculate(&rows)
        .context("Failed to calculate retail metrics")?;

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(config.report, stdout.lock());
    reporter
        .render(&report, &rows)
        .context("Failed to write report")?;

    tracing::info!("Retail analysis complete.");
    Ok(())
}
