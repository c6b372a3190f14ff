//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for hosts embedding an error catalog.

use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrataError, Result};

/// Initialize logging based on configuration
///
/// Returns the file writer guard when a log directory is configured; keep it
/// alive for as long as file logging should be flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| ErrataError::Logging(format!("invalid filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "errata.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(fmt::layer().with_ansi(false).with_writer(non_blocking)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| ErrataError::Logging(e.to_string()))?;

    debug!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a key that resolved to itself
pub fn log_lookup_miss(key: &str, locales: &[String]) {
    debug!(
        key = key,
        locales = ?locales,
        "Error line not found in any locale"
    );
}

/// Log a group fetched from a loader
pub fn log_group_loaded(namespace: &str, group: &str, locale: &str, entries: usize) {
    debug!(
        namespace = namespace,
        group = group,
        locale = locale,
        entries = entries,
        "Error group loaded"
    );
}
