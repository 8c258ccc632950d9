use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    AnalysisSettings, Config, DataSettings, ReportFormat, ReportSettings, ShrinkLag,
};

/// The file looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "retail.toml";

/// Loads the application configuration.
///
/// Sources are layered from lowest to highest precedence: built-in defaults, the
/// config file, then `RETAIL_`-prefixed environment variables (`__` separates
/// sections, e.g. `RETAIL_ANALYSIS__TOP_N`). An explicit `path` must exist; the
/// default `retail.toml` is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_layers(path, None)
}

/// Builds the layered configuration. `env` replaces the process environment as the
/// source of `RETAIL_` variables when given.
fn load_layers(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .set_default("data.input_path", "retail_data.csv")?
        .set_default("analysis.top_n", 10_i64)?
        .set_default("analysis.shrink_lag", "table_order")?
        .set_default("report.format", "text")?
        .set_default("report.show_tables", true)?
        .set_default("report.chart_width", 60_i64)?
        .set_default("report.chart_height", 20_i64)?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("RETAIL")
                .prefix_separator("_")
                .separator("__")
                .source(env),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_toml(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("retail.toml");
        std::fs::write(&file, contents).unwrap();
        (dir, file)
    }

    /// Loads with the given variables standing in for the process environment.
    fn load_with_env(path: &Path, vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_layers(Some(path), Some(env))
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let (_dir, file) = write_toml(
            r#"
[data]
input_path = "data/weekly.csv"

[analysis]
top_n = 5
shrink_lag = "per_series"

[report]
format = "json"
"#,
        );

        let config = load_with_env(&file, &[]).unwrap();
        assert_eq!(config.data.input_path, PathBuf::from("data/weekly.csv"));
        assert_eq!(config.analysis.top_n, 5);
        assert_eq!(config.analysis.shrink_lag, ShrinkLag::PerSeries);
        assert_eq!(config.report.format, ReportFormat::Json);
        // Untouched keys keep their defaults.
        assert!(config.report.show_tables);
        assert_eq!(config.report.chart_width, 60);
    }

    #[test]
    fn zero_top_n_fails_validation() {
        let (_dir, file) = write_toml("[analysis]\ntop_n = 0\n");

        let err = load_with_env(&file, &[]).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(load_with_env(&missing, &[]).is_err());
    }

    #[test]
    fn environment_overrides_file_values() {
        let (_dir, file) = write_toml(
            r#"
[analysis]
top_n = 3
shrink_lag = "table_order"

[report]
show_tables = true
chart_height = 12
"#,
        );

        let config = load_with_env(
            &file,
            &[
                ("RETAIL_ANALYSIS__TOP_N", "7"),
                ("RETAIL_ANALYSIS__SHRINK_LAG", "per_series"),
                ("RETAIL_REPORT__SHOW_TABLES", "false"),
                ("UNRELATED__TOP_N", "99"),
            ],
        )
        .unwrap();

        assert_eq!(config.analysis.top_n, 7);
        assert_eq!(config.analysis.shrink_lag, ShrinkLag::PerSeries);
        assert!(!config.report.show_tables);
        // File values without an environment counterpart survive.
        assert_eq!(config.report.chart_height, 12);
    }

    #[test]
    fn environment_values_are_validated() {
        let (_dir, file) = write_toml("[analysis]\ntop_n = 4\n");

        let err = load_with_env(&file, &[("RETAIL_ANALYSIS__TOP_N", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn narrow_chart_fails_validation() {
        let config = Config {
            data: DataSettings {
                input_path: PathBuf::from("retail_data.csv"),
            },
            analysis: AnalysisSettings::default(),
            report: ReportSettings {
                chart_width: 3,
                ..ReportSettings::default()
            },
        };
        assert!(config.validate().is_err());
    }
}
