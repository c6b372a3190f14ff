//! Plural form selection
//!
//! A line offers its forms separated by `|`. Any form may start with a
//! condition: `{n}` matches exactly, `{a,b}` and `[a,b]` match the inclusive
//! range, and `*` leaves a bound open. The first form whose condition
//! matches wins; otherwise the locale's rule picks a form by position.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::rules::PluralRules;
use crate::catalog::Line;
use crate::utils::errors::{ErrataError, Result};

static CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^[\{\[]([^\[\]\{\}]*)[\}\]](.*)$").expect("condition pattern is valid")
});

/// Picks the plural form of a line for a count
#[derive(Debug, Clone, Default)]
pub struct MessageSelector {
    rules: PluralRules,
}

impl MessageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector using a custom rule table
    pub fn with_rules(rules: PluralRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PluralRules {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut PluralRules {
        &mut self.rules
    }

    /// Select the proper form of a line for the given number
    ///
    /// Explicit conditions win. Otherwise the locale's rule picks a form by
    /// position; when the line has fewer forms than the rule expects, the
    /// last form is used (so `ru` with two forms and a count of 5 yields the
    /// second form, not the first).
    pub fn choose(&self, line: &Line, number: i64, locale: &str) -> Result<String> {
        match line {
            Line::Text(text) if text.is_empty() => Err(no_form(text, number)),
            Line::Text(text) if !text.contains('|') => Ok(text.clone()),
            Line::Text(text) => {
                let segments: Vec<&str> = text.split('|').collect();
                self.choose_from(&segments, number, locale)
                    .ok_or_else(|| no_form(text, number))
            }
            Line::Forms(forms) => {
                let segments: Vec<&str> = forms.iter().map(String::as_str).collect();
                self.choose_from(&segments, number, locale)
                    .ok_or_else(|| no_form(&line.to_string(), number))
            }
            Line::Group(_) => Err(no_form(&line.to_string(), number)),
        }
    }

    fn choose_from(&self, segments: &[&str], number: i64, locale: &str) -> Option<String> {
        if let Some(value) = extract(segments, number) {
            return Some(value.trim().to_string());
        }

        let index = self.rules.index(locale, number);
        let chosen = segments.get(index).or_else(|| segments.last())?;
        trace!(
            locale = locale,
            number = number,
            index = index,
            "Selected plural form by position"
        );

        Some(strip_condition(chosen).trim().to_string())
    }
}

/// First segment whose explicit condition matches `number`
fn extract<'a>(segments: &[&'a str], number: i64) -> Option<&'a str> {
    segments
        .iter()
        .copied()
        .find_map(|segment| extract_from_string(segment, number))
}

fn extract_from_string(segment: &str, number: i64) -> Option<&str> {
    let captures = CONDITION.captures(segment)?;
    let condition = captures.get(1)?.as_str().trim();
    let value = captures.get(2)?.as_str();

    if let Some((from, to)) = condition.split_once(',') {
        let (from, to) = (from.trim(), to.trim());
        let above = from == "*" || bound(from).is_some_and(|from| number >= from);
        let below = to == "*" || bound(to).is_some_and(|to| number <= to);
        return (above && below).then_some(value);
    }

    (bound(condition) == Some(number)).then_some(value)
}

fn bound(text: &str) -> Option<i64> {
    text.parse().ok()
}

fn strip_condition(segment: &str) -> &str {
    CONDITION
        .captures(segment)
        .and_then(|captures| captures.get(2))
        .map_or(segment, |value| value.as_str())
}

fn no_form(line: &str, number: i64) -> ErrataError {
    ErrataError::NoPluralForm {
        line: line.to_string(),
        number,
    }
}
