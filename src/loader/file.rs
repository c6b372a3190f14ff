//! Filesystem loader
//!
//! Layout under the base path:
//!
//! ```text
//! <path>/<locale>/<group>.json                       structured group file
//! <path>/<locale>/<group>.toml                       used when no .json exists
//! <path>/vendor/<namespace>/<locale>/<group>.json    namespace overrides
//! <path>/<locale>.json                               flat catalog (also in every JSON path)
//! ```
//!
//! Missing files load as empty mappings. A file that exists but does not
//! decode to an object fails the whole `load` call.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error};

use super::{is_wildcard, Loader, Messages, WILDCARD};
use crate::utils::errors::{ErrataError, Result};

/// Structured group file extensions, in lookup order
const GROUP_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Loader reading error lines from disk
#[derive(Debug, Clone)]
pub struct FileLoader {
    /// Default path for the loader
    path: PathBuf,
    /// Registered paths to flat JSON catalogs
    json_paths: Vec<PathBuf>,
    /// Namespace hints
    hints: HashMap<String, PathBuf>,
}

impl FileLoader {
    /// Create a loader rooted at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            json_paths: Vec::new(),
            hints: HashMap::new(),
        }
    }

    /// Default path of the loader
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Registered flat JSON search paths, in registration order
    pub fn json_paths(&self) -> &[PathBuf] {
        &self.json_paths
    }

    /// Load a namespaced group: hint directory first, then `vendor/` overrides
    pub fn load_namespace(&self, locale: &str, group: &str, namespace: &str) -> Result<Messages> {
        match self.hints.get(namespace) {
            Some(hint) => {
                let lines = self.load_path(hint, locale, group)?;
                self.load_namespace_overrides(lines, locale, group, namespace)
            }
            None => {
                debug!(namespace = namespace, "No hint registered for namespace");
                Ok(Messages::new())
            }
        }
    }

    fn load_namespace_overrides(
        &self,
        mut lines: Messages,
        locale: &str,
        group: &str,
        namespace: &str,
    ) -> Result<Messages> {
        let vendor = self.path.join("vendor").join(namespace);

        if let Some(overrides) = read_group(&vendor, locale, group)? {
            debug!(
                namespace = namespace,
                group = group,
                locale = locale,
                "Applying vendor overrides"
            );
            replace_recursive(&mut lines, overrides);
        }

        Ok(lines)
    }

    fn load_path(&self, base: &Path, locale: &str, group: &str) -> Result<Messages> {
        Ok(read_group(base, locale, group)?.unwrap_or_default())
    }

    /// Merge `<dir>/<locale>.json` from every JSON path, then the default path
    fn load_json_paths(&self, locale: &str) -> Result<Messages> {
        let file_name = format!("{}.json", locale);
        let mut output = Messages::new();

        for dir in self.json_paths.iter().chain(std::iter::once(&self.path)) {
            let full = dir.join(&file_name);
            if let Some(content) = read_if_exists(&full)? {
                let decoded = decode_json(&full, &content)?;
                debug!(
                    path = %full.display(),
                    entries = decoded.len(),
                    "Merging flat JSON catalog"
                );
                output.extend(decoded);
            }
        }

        Ok(output)
    }
}

impl Loader for FileLoader {
    fn load(&self, locale: &str, group: &str, namespace: Option<&str>) -> Result<Messages> {
        if group == WILDCARD && namespace == Some(WILDCARD) {
            return self.load_json_paths(locale);
        }

        if is_wildcard(namespace) {
            return self.load_path(&self.path, locale, group);
        }

        self.load_namespace(locale, group, namespace.unwrap_or(WILDCARD))
    }

    fn add_namespace(&mut self, namespace: &str, hint: &Path) {
        self.hints.insert(namespace.to_string(), hint.to_path_buf());
    }

    fn add_json_path(&mut self, path: &Path) {
        self.json_paths.push(path.to_path_buf());
    }

    fn namespaces(&self) -> HashMap<String, PathBuf> {
        self.hints.clone()
    }
}

/// Read `<base>/<locale>/<group>.<ext>` for the first extension that exists
fn read_group(base: &Path, locale: &str, group: &str) -> Result<Option<Messages>> {
    let dir = base.join(locale);

    for ext in GROUP_EXTENSIONS {
        let full = dir.join(format!("{}.{}", group, ext));
        if let Some(content) = read_if_exists(&full)? {
            debug!(path = %full.display(), "Loading error group file");
            let messages = match ext {
                "toml" => decode_toml(&full, &content)?,
                _ => decode_json(&full, &content)?,
            };
            return Ok(Some(messages));
        }
    }

    Ok(None)
}

/// Contents of `path`, or `None` when no file can be there
///
/// Any path that is not an existing regular file (missing, under a
/// non-directory, or a name the filesystem rejects) reads as absent.
fn read_if_exists(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }

    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn decode_json(path: &Path, content: &str) -> Result<Messages> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            error!(path = %path.display(), "Errors file does not contain a JSON object");
            Err(ErrataError::invalid_catalog(
                path,
                format!("expected a JSON object, found {}", json_kind(&other)),
            ))
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Errors file contains invalid JSON");
            Err(ErrataError::invalid_catalog(path, e))
        }
    }
}

fn decode_toml(path: &Path, content: &str) -> Result<Messages> {
    toml::from_str::<Messages>(content).map_err(|e| {
        error!(path = %path.display(), error = %e, "Errors file contains invalid TOML");
        ErrataError::invalid_catalog(path, e)
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Recursively replace `base` entries with `overrides`
///
/// Objects and arrays merge; anything else is replaced.
pub(crate) fn replace_recursive(base: &mut Messages, overrides: Messages) {
    for (key, value) in overrides {
        match base.get_mut(&key) {
            Some(slot) => replace_value(slot, value),
            None => {
                base.insert(key, value);
            }
        }
    }
}

fn replace_value(slot: &mut Value, value: Value) {
    match (slot, value) {
        (Value::Object(base), Value::Object(overrides)) => replace_recursive(base, overrides),
        (Value::Array(base), Value::Array(overrides)) => {
            for (index, item) in overrides.into_iter().enumerate() {
                match base.get_mut(index) {
                    Some(existing) => replace_value(existing, item),
                    None => base.push(item),
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
