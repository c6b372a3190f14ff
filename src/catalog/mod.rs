//! Error catalog
//!
//! The [`Catalog`] resolves keys such as `billing::invoice.overdue` to
//! lines. Groups are fetched from a [`Loader`] on first use and cached per
//! `(namespace, group, locale)`, including groups that turned out empty,
//! so a missing file is read at most once.
//!
//! Missing lines are not errors: a lookup that finds nothing returns the
//! key itself. Only corrupt catalogs and impossible plural selections
//! surface as [`ErrataError`](crate::ErrataError).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tracing::{trace, warn};

use crate::config::CatalogConfig;
use crate::loader::{FileLoader, Loader, Messages, WILDCARD};
use crate::plural::MessageSelector;
use crate::utils::errors::Result;
use crate::utils::logging::{log_group_loaded, log_lookup_miss};

pub mod contract;
pub mod countable;
pub mod key;
pub mod line;
pub mod replacements;

pub use contract::ErrorLookup;
pub use countable::Countable;
pub use key::{parse_key, ParsedKey};
pub use line::Line;
pub use replacements::{make_replacements, Replacements};

/// Loaded groups: namespace -> group -> locale -> messages
pub type Loaded = HashMap<String, HashMap<String, HashMap<String, Messages>>>;

/// Locale-aware error line catalog
///
/// Lookups take `&self`; the group cache is filled behind a lock so a
/// catalog can be shared across threads. Configuration changes
/// (`set_locale`, `add_namespace`, ...) take `&mut self`.
#[derive(Debug)]
pub struct Catalog {
    loader: Box<dyn Loader>,
    locale: String,
    fallback: Option<String>,
    loaded: RwLock<Loaded>,
    selector: MessageSelector,
}

impl Catalog {
    /// Create a catalog over `loader` with a default locale and no fallback
    pub fn new(loader: impl Loader + 'static, locale: impl Into<String>) -> Self {
        Self {
            loader: Box::new(loader),
            locale: locale.into(),
            fallback: None,
            loaded: RwLock::new(Loaded::new()),
            selector: MessageSelector::new(),
        }
    }

    /// Build a file-backed catalog from configuration
    pub fn from_settings(config: &CatalogConfig) -> Self {
        let mut loader = FileLoader::new(&config.path);
        for path in &config.json_paths {
            loader.add_json_path(Path::new(path));
        }
        for (namespace, hint) in &config.namespaces {
            loader.add_namespace(namespace, Path::new(hint));
        }

        let mut catalog = Self::new(loader, config.locale.clone());
        catalog.fallback = config.fallback_locale.clone().filter(|f| !f.is_empty());
        catalog
    }

    /// Determine if a line exists for the given locale only
    pub fn has_for_locale(&self, key: &str, locale: Option<&str>) -> Result<bool> {
        self.has(key, locale, false)
    }

    /// Determine if a line exists
    ///
    /// A line whose text is exactly its own key reports `false`.
    pub fn has(&self, key: &str, locale: Option<&str>, fallback: bool) -> Result<bool> {
        let line = self.get(key, &Replacements::new(), locale, fallback)?;
        Ok(!line.is_key(key))
    }

    /// Get the error line for a key, using the fallback locale
    pub fn error(&self, key: &str, replace: &Replacements, locale: Option<&str>) -> Result<Line> {
        self.get(key, replace, locale, true)
    }

    /// Get the line for a key
    ///
    /// Walks the locale chain and returns the first line found, or the key
    /// itself as [`Line::Text`] when no locale has it.
    pub fn get(
        &self,
        key: &str,
        replace: &Replacements,
        locale: Option<&str>,
        fallback: bool,
    ) -> Result<Line> {
        let ParsedKey { namespace, group, item } = parse_key(key);

        let locales = if fallback {
            self.locale_array(locale)
        } else {
            vec![self.requested_locale(locale).to_string()]
        };

        for locale in &locales {
            if let Some(line) =
                self.get_line(&namespace, &group, locale, item.as_deref(), replace)?
            {
                return Ok(line);
            }
        }

        log_lookup_miss(key, &locales);
        Ok(Line::Text(key.to_string()))
    }

    /// Look a full key up in the flat JSON catalogs, then as a regular key
    pub fn get_from_json(
        &self,
        key: &str,
        replace: &Replacements,
        locale: Option<&str>,
    ) -> Result<Line> {
        let locale = self.requested_locale(locale).to_string();

        self.load(WILDCARD, WILDCARD, &locale)?;

        let line = self
            .read_loaded()
            .get(WILDCARD)
            .and_then(|groups| groups.get(WILDCARD))
            .and_then(|locales| locales.get(&locale))
            .and_then(|messages| messages.get(key))
            .and_then(Value::as_str)
            .map(str::to_string);

        match line {
            Some(line) => Ok(Line::Text(make_replacements(&line, replace))),
            None => {
                let fallback = self.get(key, replace, Some(&locale), true)?;
                if !fallback.is_key(key) {
                    return Ok(fallback);
                }
                Ok(Line::Text(make_replacements(key, replace)))
            }
        }
    }

    /// Alias of [`Catalog::choice`]
    pub fn error_choice(
        &self,
        key: &str,
        number: impl Countable,
        replace: &Replacements,
        locale: Option<&str>,
    ) -> Result<String> {
        self.choice(key, number, replace, locale)
    }

    /// Get a line according to a count
    ///
    /// Collections are counted by length. `:count` is available to the
    /// chosen form alongside `replace`.
    pub fn choice(
        &self,
        key: &str,
        number: impl Countable,
        replace: &Replacements,
        locale: Option<&str>,
    ) -> Result<String> {
        let locale = self.locale_for_choice(locale);
        let line = self.get(key, replace, Some(&locale), true)?;

        let number = number.as_count();
        let mut replace = replace.clone();
        replace.insert("count".to_string(), number.to_string());

        let chosen = self.selector.choose(&line, number, &locale)?;
        Ok(make_replacements(&chosen, &replace))
    }

    fn locale_for_choice(&self, locale: Option<&str>) -> String {
        [locale, Some(self.locale.as_str()), self.fallback.as_deref()]
            .into_iter()
            .flatten()
            .find(|locale| !locale.is_empty())
            .unwrap_or_default()
            .to_string()
    }

    fn get_line(
        &self,
        namespace: &str,
        group: &str,
        locale: &str,
        item: Option<&str>,
        replace: &Replacements,
    ) -> Result<Option<Line>> {
        self.load(namespace, group, locale)?;

        let loaded = self.read_loaded();
        let Some(messages) = loaded
            .get(namespace)
            .and_then(|groups| groups.get(group))
            .and_then(|locales| locales.get(locale))
        else {
            return Ok(None);
        };

        let line = match item {
            Some(path) => line::lookup(messages, path).and_then(Line::from_value),
            None if messages.is_empty() => None,
            None => Some(Line::Group(messages.clone())),
        };

        trace!(
            namespace = namespace,
            group = group,
            locale = locale,
            found = line.is_some(),
            "Line lookup"
        );

        Ok(line.map(|line| match line {
            Line::Text(text) => Line::Text(make_replacements(&text, replace)),
            other => other,
        }))
    }

    /// Add lines keyed by `group.item` to the given locale
    ///
    /// Lines land straight in the cache; the loader is never asked for the
    /// groups they touch. Keys without a `.` have no group and are skipped.
    pub fn add_lines(&self, lines: Messages, locale: &str, namespace: Option<&str>) {
        let namespace = namespace.filter(|ns| !ns.is_empty()).unwrap_or(WILDCARD);
        let mut loaded = self.write_loaded();

        for (key, value) in lines {
            let Some((group, item)) = key.split_once('.') else {
                warn!(key = %key, "Skipping line without a group");
                continue;
            };

            let messages = loaded
                .entry(namespace.to_string())
                .or_default()
                .entry(group.to_string())
                .or_default()
                .entry(locale.to_string())
                .or_default();
            line::insert(messages, item, value);
        }
    }

    /// Load the specified group unless it is already cached
    pub fn load(&self, namespace: &str, group: &str, locale: &str) -> Result<()> {
        if self.is_loaded(namespace, group, locale) {
            return Ok(());
        }

        let lines = self.loader.load(locale, group, Some(namespace))?;
        log_group_loaded(namespace, group, locale, lines.len());

        self.write_loaded()
            .entry(namespace.to_string())
            .or_default()
            .entry(group.to_string())
            .or_default()
            .entry(locale.to_string())
            .or_insert(lines);

        Ok(())
    }

    /// Determine if the given group has been loaded
    pub fn is_loaded(&self, namespace: &str, group: &str, locale: &str) -> bool {
        self.read_loaded()
            .get(namespace)
            .and_then(|groups| groups.get(group))
            .is_some_and(|locales| locales.contains_key(locale))
    }

    /// Add a new namespace to the loader
    pub fn add_namespace(&mut self, namespace: &str, hint: impl AsRef<Path>) {
        self.loader.add_namespace(namespace, hint.as_ref());
    }

    /// Add a new JSON path to the loader
    pub fn add_json_path(&mut self, path: impl AsRef<Path>) {
        self.loader.add_json_path(path.as_ref());
    }

    /// Namespace hints registered with the loader
    pub fn namespaces(&self) -> HashMap<String, PathBuf> {
        self.loader.namespaces()
    }

    /// Locale chain: requested (or default) locale, then the fallback
    fn locale_array(&self, locale: Option<&str>) -> Vec<String> {
        let mut locales: Vec<String> = Vec::with_capacity(2);
        for candidate in [Some(self.requested_locale(locale)), self.fallback.as_deref()]
            .into_iter()
            .flatten()
        {
            if !candidate.is_empty() && !locales.iter().any(|l| l == candidate) {
                locales.push(candidate.to_string());
            }
        }
        locales
    }

    fn requested_locale<'a>(&'a self, locale: Option<&'a str>) -> &'a str {
        locale.filter(|l| !l.is_empty()).unwrap_or(&self.locale)
    }

    pub fn selector(&self) -> &MessageSelector {
        &self.selector
    }

    pub fn set_selector(&mut self, selector: MessageSelector) {
        self.selector = selector;
    }

    pub fn loader(&self) -> &dyn Loader {
        self.loader.as_ref()
    }

    /// Default locale
    pub fn locale(&self) -> &str {
        self.get_locale()
    }

    pub fn get_locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    pub fn get_fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    pub fn set_fallback(&mut self, fallback: impl Into<String>) {
        self.fallback = Some(fallback.into());
    }

    /// Replace every loaded group
    pub fn set_loaded(&mut self, loaded: Loaded) {
        *self.loaded.get_mut().unwrap_or_else(PoisonError::into_inner) = loaded;
    }

    // Every write is a single insert, so a poisoned cache is still consistent.
    fn read_loaded(&self) -> RwLockReadGuard<'_, Loaded> {
        self.loaded.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_loaded(&self) -> RwLockWriteGuard<'_, Loaded> {
        self.loaded.write().unwrap_or_else(PoisonError::into_inner)
    }
}
