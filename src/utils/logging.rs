//! Structured logging setup driven by [`LoggingConfig`].
//!
//! The codec itself only emits `tracing` events (skipped members,
//! saturation, truncation); this module wires those events to a
//! subscriber for applications that do not bring their own.

use crate::config::LoggingConfig;
use crate::error::{BaggageError, Result};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Initialize a global tracing subscriber from the logging configuration.
///
/// The `RUST_LOG` environment variable takes precedence over the
/// configured level. Fails if a global subscriber is already set.
///
/// # Errors
/// Returns [`BaggageError::LoggingError`] when subscriber installation
/// fails, or [`BaggageError::Io`] when the log file cannot be opened.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if config.log_to_file {
        let path = config.log_file_path.as_deref().ok_or_else(|| {
            BaggageError::ConfigError(
                "log_file_path must be specified when log_to_file is true".to_string(),
            )
        })?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false);
        if config.json_format {
            builder
                .json()
                .try_init()
                .map_err(|e| BaggageError::LoggingError(e.to_string()))
        } else {
            builder
                .try_init()
                .map_err(|e| BaggageError::LoggingError(e.to_string()))
        }
    } else {
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        if config.json_format {
            builder
                .json()
                .try_init()
                .map_err(|e| BaggageError::LoggingError(e.to_string()))
        } else {
            builder
                .try_init()
                .map_err(|e| BaggageError::LoggingError(e.to_string()))
        }
    }
}
