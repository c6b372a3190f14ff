//! In-memory loader

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{is_wildcard, Loader, Messages, WILDCARD};
use crate::utils::errors::Result;

/// Loader serving messages registered with [`ArrayLoader::add_messages`]
///
/// Namespace hints and JSON paths mean nothing without a filesystem, so
/// [`Loader::add_namespace`] and [`Loader::add_json_path`] are accepted and
/// ignored, and [`Loader::namespaces`] is always empty.
#[derive(Debug, Clone, Default)]
pub struct ArrayLoader {
    /// namespace -> locale -> group -> messages
    messages: HashMap<String, HashMap<String, HashMap<String, Messages>>>,
}

impl ArrayLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add messages to the loader, replacing any previous set for the same triple
    pub fn add_messages(
        &mut self,
        locale: &str,
        group: &str,
        messages: Messages,
        namespace: Option<&str>,
    ) -> &mut Self {
        let namespace = namespace_key(namespace);
        self.messages
            .entry(namespace.to_string())
            .or_default()
            .entry(locale.to_string())
            .or_default()
            .insert(group.to_string(), messages);
        self
    }
}

impl Loader for ArrayLoader {
    fn load(&self, locale: &str, group: &str, namespace: Option<&str>) -> Result<Messages> {
        let messages = self
            .messages
            .get(namespace_key(namespace))
            .and_then(|locales| locales.get(locale))
            .and_then(|groups| groups.get(group))
            .cloned()
            .unwrap_or_default();

        Ok(messages)
    }

    fn add_namespace(&mut self, _namespace: &str, _hint: &Path) {}

    fn add_json_path(&mut self, _path: &Path) {}

    fn namespaces(&self) -> HashMap<String, PathBuf> {
        HashMap::new()
    }
}

fn namespace_key(namespace: Option<&str>) -> &str {
    match namespace {
        Some(ns) if !is_wildcard(Some(ns)) => ns,
        _ => WILDCARD,
    }
}
