//! Placeholder replacement
//!
//! `:name` is replaced with the value as given, `:NAME` with the value
//! upper-cased and `:Name` with the value's first letter upper-cased.
//! Longer keys are replaced first so `:name_full` is not clobbered by `:name`.

use std::collections::HashMap;

/// Placeholder values keyed by placeholder name (without the leading colon)
pub type Replacements = HashMap<String, String>;

/// Make the placeholder replacements on a line
pub fn make_replacements(line: &str, replace: &Replacements) -> String {
    if replace.is_empty() {
        return line.to_string();
    }

    let mut line = line.to_string();
    for (key, value) in sort_replacements(replace) {
        line = line
            .replace(&format!(":{}", key), value)
            .replace(&format!(":{}", key.to_uppercase()), &value.to_uppercase())
            .replace(&format!(":{}", ucfirst(key)), &ucfirst(value));
    }

    line
}

/// Longest key first; ties broken alphabetically so output does not depend on map order
fn sort_replacements(replace: &Replacements) -> Vec<(&str, &str)> {
    let mut sorted: Vec<(&str, &str)> = replace
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    sorted.sort_by(|(a, _), (b, _)| {
        b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b))
    });
    sorted
}

fn ucfirst(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(pairs: &[(&str, &str)]) -> Replacements {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_case_variants() {
        let replace = replacements(&[("name", "ann")]);
        assert_eq!(
            make_replacements("Hello :name, :NAME, :Name", &replace),
            "Hello ann, ANN, Ann"
        );
    }

    #[test]
    fn test_longest_key_first() {
        let replace = replacements(&[("name", "X"), ("name_full", "Y")]);
        assert_eq!(make_replacements(":name_full :name", &replace), "Y X");
    }

    #[test]
    fn test_empty_replacements_leave_line() {
        assert_eq!(make_replacements("Hello :name", &Replacements::new()), "Hello :name");
    }

    #[test]
    fn test_empty_key_ignored() {
        let replace = replacements(&[("", "boom")]);
        assert_eq!(make_replacements("a:b", &replace), "a:b");
    }

    #[test]
    fn test_ucfirst_unicode() {
        assert_eq!(ucfirst("émile"), "Émile");
        assert_eq!(ucfirst(""), "");
    }
}
