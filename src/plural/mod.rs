//! Pluralization
//!
//! [`MessageSelector`] picks one form out of a line for a count, using
//! explicit `{n}` / `[a,b]` conditions first and the locale's
//! [`PluralRule`] otherwise.

pub mod rules;
pub mod selector;

pub use rules::{PluralRule, PluralRules};
pub use selector::MessageSelector;
