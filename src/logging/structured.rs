//! Structured logging setup using tracing
//!
//! The subscriber built here is installed as the *default for the current thread*
//! rather than as a process-wide global. Its lifetime is the returned
//! [`LoggingGuard`], so a run owns its logging context and tests can install
//! their own subscriber with a capturing writer.

use crate::config::LoggingConfig;
use crate::domain::{ExporterError, Result};
use tracing::subscriber::DefaultGuard;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Timestamp layout of console lines, e.g. `2022-05-11 18:14:01,153`
pub const CONSOLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Keeps the run's logging context alive
///
/// Dropping it uninstalls the subscriber and flushes the file writer.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
    _dispatch_guard: DefaultGuard,
}

/// Initialize logging for this run, writing console lines to stderr
///
/// # Example
///
/// ```no_run
/// use drawio_exporter::logging::init_logging;
/// use drawio_exporter::config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// let _guard = init_logging("info", &config).expect("Failed to initialize logging");
/// // Keep _guard alive for the duration of the run
/// ```
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    init_logging_with_writer(log_level_str, config, std::io::stderr)
}

/// Initialize logging for this run with a custom console writer
pub fn init_logging_with_writer<W>(
    log_level_str: &str,
    config: &LoggingConfig,
    console_writer: W,
) -> Result<LoggingGuard>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let log_level = parse_log_level(log_level_str)?;

    let mut layers = Vec::new();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_timer(ChronoLocal::new(CONSOLE_TIME_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(false)
        .with_writer(console_writer)
        .with_filter(build_filter(log_level));

    layers.push(console_layer.boxed());

    let file_guard = if config.local_enabled {
        let rotation = match config.local_rotation.as_str() {
            "hourly" => Rotation::HOURLY,
            "never" => Rotation::NEVER,
            _ => Rotation::DAILY,
        };

        std::fs::create_dir_all(&config.local_path).map_err(|e| {
            ExporterError::Configuration(format!(
                "Failed to create log directory {}: {}",
                config.local_path, e
            ))
        })?;

        let file_appender =
            RollingFileAppender::new(rotation, &config.local_path, "drawio-exporter.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_filter(build_filter(log_level));

        layers.push(file_layer.boxed());
        Some(guard)
    } else {
        None
    };

    let dispatch_guard = tracing_subscriber::registry().with(layers).set_default();

    tracing::debug!(
        level = %log_level,
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
        _dispatch_guard: dispatch_guard,
    })
}

/// `RUST_LOG` wins when set; otherwise only this crate's events at `level`
fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("drawio_exporter={level}")))
}

/// Parse log level from string
pub(crate) fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ExporterError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
