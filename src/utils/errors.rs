//! Error handling for Errata
//!
//! This module defines the main error type used throughout the crate.
//! Missing translations and missing files are not errors; only conditions
//! that indicate corrupt data or misconfiguration end up here.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Errata
#[derive(Error, Debug)]
pub enum ErrataError {
    #[error("Errors file [{}] contains an invalid structure: {}", .path.display(), .reason)]
    InvalidCatalog { path: PathBuf, reason: String },

    #[error("No plural form available for {number} in line: {line:?}")]
    NoPluralForm { line: String, number: i64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Errata operations
pub type Result<T> = std::result::Result<T, ErrataError>;

impl From<config::ConfigError> for ErrataError {
    fn from(err: config::ConfigError) -> Self {
        ErrataError::Config(err.to_string())
    }
}

impl ErrataError {
    /// Build an invalid catalog error for the given file
    pub fn invalid_catalog(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ErrataError::InvalidCatalog {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if the error is recoverable
    ///
    /// A recoverable error may succeed when the same call is retried after
    /// the environment changes (a file becomes readable, a fixed catalog is
    /// deployed). Errata itself never retries.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ErrataError::InvalidCatalog { .. } => false,
            ErrataError::NoPluralForm { .. } => false,
            ErrataError::Config(_) => false,
            ErrataError::Logging(_) => false,
            ErrataError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrataError::InvalidCatalog { .. } => ErrorSeverity::Critical,
            ErrataError::Config(_) => ErrorSeverity::Critical,
            ErrataError::Logging(_) => ErrorSeverity::Warning,
            ErrataError::NoPluralForm { .. } => ErrorSeverity::Warning,
            ErrataError::Io(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
