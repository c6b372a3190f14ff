//! Shorthand lookup
//!
//! [`error`] mirrors the catalog's main entry point for call sites that
//! sometimes only want the catalog itself.

use crate::catalog::{Catalog, Line, Replacements};
use crate::utils::errors::Result;

/// Either the catalog (no key given) or a resolved line
#[derive(Debug)]
pub enum Lookup<'a> {
    Catalog(&'a Catalog),
    Line(Line),
}

/// Resolve `key` through `catalog`, or hand the catalog back when `key` is `None`
pub fn error<'a>(
    catalog: &'a Catalog,
    key: Option<&str>,
    replace: &Replacements,
    locale: Option<&str>,
) -> Result<Lookup<'a>> {
    match key {
        None => Ok(Lookup::Catalog(catalog)),
        Some(key) => Ok(Lookup::Line(catalog.error(key, replace, locale)?)),
    }
}
