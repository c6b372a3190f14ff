//! Error line loaders
//!
//! A [`Loader`] turns a `(locale, group, namespace)` triple into a mapping
//! of items to lines. The catalog caches whatever a loader returns, so
//! loaders are free to hit the filesystem on every call.
//!
//! Two loaders ship with the crate:
//! - [`FileLoader`] reads `<path>/<locale>/<group>.json` files, namespace
//!   hint directories with `vendor/` overrides, and flat `<locale>.json`
//!   catalogs.
//! - [`ArrayLoader`] serves messages registered in memory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::utils::errors::Result;

pub mod array;
pub mod file;

pub use array::ArrayLoader;
pub use file::FileLoader;

/// Items of a loaded group: nested objects for dotted paths, arrays for plural forms
pub type Messages = serde_json::Map<String, serde_json::Value>;

/// Wildcard namespace (and group, for flat JSON catalogs)
pub const WILDCARD: &str = "*";

/// Source of error lines for the catalog
pub trait Loader: Send + Sync + std::fmt::Debug {
    /// Load the messages for the given locale
    ///
    /// A missing source yields an empty mapping. Only corrupt data is an error.
    fn load(&self, locale: &str, group: &str, namespace: Option<&str>) -> Result<Messages>;

    /// Register (or replace) the base path for a namespace
    fn add_namespace(&mut self, namespace: &str, hint: &Path);

    /// Append a directory searched for flat `<locale>.json` catalogs
    fn add_json_path(&mut self, path: &Path);

    /// Registered namespace hints
    fn namespaces(&self) -> HashMap<String, PathBuf>;
}

/// Treat `None`, empty, and `*` uniformly as the wildcard namespace
pub(crate) fn is_wildcard(namespace: Option<&str>) -> bool {
    matches!(namespace, None | Some("") | Some(WILDCARD))
}
