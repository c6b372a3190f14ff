//! Test helpers module
//!
//! Shared fixtures for the integration tests: a loader that counts its
//! calls and helpers writing catalog files into temporary directories.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use errata::{ArrayLoader, Loader, Messages, Replacements, Result};
use serde_json::Value;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Loader double recording every `load` call
#[derive(Debug, Clone, Default)]
pub struct CountingLoader {
    inner: ArrayLoader,
    calls: Arc<AtomicUsize>,
}

impl CountingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(
        mut self,
        locale: &str,
        group: &str,
        messages: Value,
        namespace: Option<&str>,
    ) -> Self {
        self.inner.add_messages(locale, group, to_messages(messages), namespace);
        self
    }

    /// Handle to the call counter that survives moving the loader into a catalog
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Loader for CountingLoader {
    fn load(&self, locale: &str, group: &str, namespace: Option<&str>) -> Result<Messages> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.load(locale, group, namespace)
    }

    fn add_namespace(&mut self, namespace: &str, hint: &Path) {
        self.inner.add_namespace(namespace, hint);
    }

    fn add_json_path(&mut self, path: &Path) {
        self.inner.add_json_path(path);
    }

    fn namespaces(&self) -> HashMap<String, PathBuf> {
        self.inner.namespaces()
    }
}

/// Convert an object literal into loader messages
pub fn to_messages(value: Value) -> Messages {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object literal, got {}", other),
    }
}

/// Build replacements from pairs
pub fn replacements(pairs: &[(&str, &str)]) -> Replacements {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Write a fixture file, creating parent directories
pub fn write_file(path: &Path, content: &str) {
    let parent = path.parent().expect("fixture has a parent directory");
    fs::create_dir_all(parent).expect("create fixture dirs");
    fs::write(path, content).expect("write fixture");
}

/// Write `value` as JSON at `path`
pub fn write_json(path: &Path, value: &Value) {
    write_file(path, &serde_json::to_string_pretty(value).expect("serialize fixture"));
}
