//! Configuration management module
//!
//! This module handles loading and validation of catalog configuration
//! from config files and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{Settings, CatalogConfig, LoggingConfig};
