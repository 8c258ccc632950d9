use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataSettings,
    pub analysis: AnalysisSettings,
    pub report: ReportSettings,
}

/// Where the transactional dataset lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// Path to the delimited input file.
    pub input_path: PathBuf,
}

/// Parameters for the metric and aggregation stages.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    /// How many SKUs go into the top and bottom lists.
    pub top_n: usize,
    /// Which row is "previous" when computing expected inventory.
    pub shrink_lag: ShrinkLag,
}

/// Parameters for the output stage.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    pub format: ReportFormat,
    /// Print the SKU/shrink/OOS summary tables in text mode.
    pub show_tables: bool,
    /// Terminal chart width in characters.
    pub chart_width: usize,
    /// Terminal chart height in lines.
    pub chart_height: usize,
}

/// Selects the row each record's expected inventory is lagged from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ShrinkLag {
    /// The previous row of the whole table, in as-loaded order.
    #[default]
    TableOrder,
    /// The previous date within the same (store, SKU) series.
    PerSeries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Tables, terminal charts and recommendations.
    #[default]
    Text,
    /// The full report as pretty-printed JSON.
    Json,
}

pub const MIN_CHART_WIDTH: usize = 10;
pub const MIN_CHART_HEIGHT: usize = 5;

impl Config {
    /// Rejects settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.input_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "data.input_path must not be empty".to_string(),
            ));
        }
        if self.analysis.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "analysis.top_n must be greater than zero".to_string(),
            ));
        }
        if self.report.chart_width < MIN_CHART_WIDTH {
            return Err(ConfigError::ValidationError(format!(
                "report.chart_width must be at least {MIN_CHART_WIDTH}, got {}",
                self.report.chart_width
            )));
        }
        if self.report.chart_height < MIN_CHART_HEIGHT {
            return Err(ConfigError::ValidationError(format!(
                "report.chart_height must be at least {MIN_CHART_HEIGHT}, got {}",
                self.report.chart_height
            )));
        }
        Ok(())
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_n: 10,
            shrink_lag: ShrinkLag::default(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            show_tables: true,
            chart_width: 60,
            chart_height: 20,
        }
    }
}
