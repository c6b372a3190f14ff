//! Errata
//!
//! A locale-aware error message catalog. Keys of the form
//! `[namespace::]group.item` resolve to lines loaded from disk or memory,
//! with fallback locales, `:placeholder` replacement and pluralization.
//!
//! ```
//! use errata::{ArrayLoader, Catalog, Replacements};
//! use serde_json::json;
//!
//! let mut loader = ArrayLoader::new();
//! let lines = json!({
//!     "missing": "The :field field is required.",
//!     "apples": "one apple|:count apples",
//! });
//! loader.add_messages("en", "validation", lines.as_object().cloned().unwrap(), None);
//!
//! let catalog = Catalog::new(loader, "en");
//! let replace: Replacements = [("field".to_string(), "email".to_string())].into();
//!
//! let line = catalog.error("validation.missing", &replace, None).unwrap();
//! assert_eq!(line, "The email field is required.");
//! let apples = catalog.choice("validation.apples", 3, &Replacements::new(), None).unwrap();
//! assert_eq!(apples, "3 apples");
//! assert_eq!(catalog.error("validation.unknown", &replace, None).unwrap(), "validation.unknown");
//! ```

pub mod catalog;
pub mod config;
pub mod helpers;
pub mod loader;
pub mod plural;
pub mod utils;

// Re-export commonly used types
pub use catalog::{Catalog, Countable, ErrorLookup, Line, Replacements};
pub use config::Settings;
pub use loader::{ArrayLoader, FileLoader, Loader, Messages};
pub use plural::{MessageSelector, PluralRule, PluralRules};
pub use utils::errors::{ErrataError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
