//! Configuration validation module
//!
//! This module provides validation functions for catalog configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{ErrataError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_catalog_config(&settings.catalog)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate catalog configuration
pub fn validate_catalog_config(config: &super::CatalogConfig) -> Result<()> {
    if config.locale.is_empty() {
        return Err(ErrataError::Config(
            "Default locale is required".to_string()
        ));
    }

    if let Some(fallback) = &config.fallback_locale {
        if fallback.is_empty() {
            return Err(ErrataError::Config(
                "Fallback locale cannot be empty when set".to_string()
            ));
        }
    }

    if config.path.is_empty() {
        return Err(ErrataError::Config(
            "Catalog path is required".to_string()
        ));
    }

    if config.json_paths.iter().any(String::is_empty) {
        return Err(ErrataError::Config(
            "JSON search paths cannot be empty".to_string()
        ));
    }

    for (namespace, hint) in &config.namespaces {
        if namespace.is_empty() || namespace == "*" {
            return Err(ErrataError::Config(
                format!("Invalid namespace name: '{}'", namespace)
            ));
        }
        if hint.is_empty() {
            return Err(ErrataError::Config(
                format!("Namespace '{}' has an empty path", namespace)
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ErrataError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ErrataError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
