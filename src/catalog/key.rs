//! Key parsing
//!
//! Keys look like `[namespace::]group[.item]`, where `item` may itself be a
//! dotted path into the group.

use crate::loader::WILDCARD;

/// A key split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub namespace: String,
    pub group: String,
    /// `None` selects the whole group
    pub item: Option<String>,
}

/// Parse a key into namespace, group, and item
pub fn parse_key(key: &str) -> ParsedKey {
    let (namespace, rest) = match key.split_once("::") {
        Some((namespace, rest)) => (namespace, rest),
        None => (WILDCARD, key),
    };

    let (group, item) = match rest.split_once('.') {
        Some((group, item)) => (group, Some(item.to_string())),
        None => (rest, None),
    };

    ParsedKey {
        namespace: namespace.to_string(),
        group: group.to_string(),
        item,
    }
}
