//! Logging system initialization
//!
//! Sets up tracing-based logging. Output goes to stderr unless a log directory
//! is configured, in which case it is written to `<log_dir>/folio.log`.
//! `RUST_LOG` takes precedence over the configured level.

use crate::config::LoggingSettings;
use crate::error::{FolioError, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Build the filter from `RUST_LOG`, falling back to the configured level
fn build_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Initialize the global tracing subscriber
///
/// Fails if a global subscriber is already installed or the log directory
/// cannot be created.
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let filter = build_filter(settings);

    if let Some(log_dir) = &settings.log_dir {
        std::fs::create_dir_all(log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix("folio")
            .filename_suffix("log")
            .build(log_dir)
            .map_err(|e| FolioError::ConfigError(Box::new(e)))?;

        let subscriber = fmt()
            .with_writer(file_appender)
            .with_env_filter(filter)
            .with_ansi(false) // Disable ANSI colors for file output
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| FolioError::ConfigError(Box::new(e)))?;
    } else {
        let subscriber = fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .with_target(true)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| FolioError::ConfigError(Box::new(e)))?;
    }

    tracing::info!("folio v{} logging initialized", env!("CARGO_PKG_VERSION"));
    Ok(())
}
