use crate::error::ConfigError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout carries only the report. The filter defaults to `info`
/// and can be overridden with `RUST_LOG`. The returned guard must be kept alive for
/// the duration of the program, or buffered log lines are lost.
pub fn init_tracing() -> Result<WorkerGuard, ConfigError> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    Ok(guard)
}
