//! Catalog settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from config files and environment variables.

use std::collections::HashMap;
use std::path::Path;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Error catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Default locale used when a lookup names none
    pub locale: String,
    /// Secondary locale consulted when a line is missing
    pub fallback_locale: Option<String>,
    /// Base directory holding `<locale>/<group>` files
    pub path: String,
    /// Extra directories searched for flat `<locale>.json` catalogs
    pub json_paths: Vec<String>,
    /// Namespace hints: namespace name -> base directory
    pub namespaces: HashMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from an optional `errata` config file and `ERRATA__*` environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("errata").required(false))
            .add_source(
                config::Environment::with_prefix("ERRATA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from an explicit config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ErrataError> {
        super::validation::validate_settings(self)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback_locale: Some("en".to_string()),
            path: "lang".to_string(),
            json_paths: Vec::new(),
            namespaces: HashMap::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}
