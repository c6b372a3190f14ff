//! Public lookup contract

use super::{Catalog, Countable, Line, Replacements};
use crate::utils::errors::Result;

/// The lookup surface callers program against
pub trait ErrorLookup {
    /// Get the error line for a key
    fn error(&self, key: &str, replace: &Replacements, locale: Option<&str>) -> Result<Line>;

    /// Get an error line according to a count
    fn error_choice(
        &self,
        key: &str,
        number: &dyn Countable,
        replace: &Replacements,
        locale: Option<&str>,
    ) -> Result<String>;

    /// Get the default locale being used
    fn locale(&self) -> &str;

    /// Set the default locale
    fn set_locale(&mut self, locale: &str);
}

impl ErrorLookup for Catalog {
    fn error(&self, key: &str, replace: &Replacements, locale: Option<&str>) -> Result<Line> {
        Catalog::error(self, key, replace, locale)
    }

    fn error_choice(
        &self,
        key: &str,
        number: &dyn Countable,
        replace: &Replacements,
        locale: Option<&str>,
    ) -> Result<String> {
        self.choice(key, number, replace, locale)
    }

    fn locale(&self) -> &str {
        self.get_locale()
    }

    fn set_locale(&mut self, locale: &str) {
        Catalog::set_locale(self, locale);
    }
}
