//! Resolved lines and dotted-path access into loaded groups

use std::fmt;

use serde_json::Value;

use crate::loader::Messages;

/// Result of a catalog lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// A single message with placeholders already replaced
    Text(String),
    /// Ordered plural forms
    Forms(Vec<String>),
    /// A nested part of a group (or a whole group)
    Group(Messages),
}

impl Line {
    /// The text of a [`Line::Text`]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Line::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the lookup fell through to the literal key
    ///
    /// A message whose text equals its own key is indistinguishable from a
    /// missing one.
    pub fn is_key(&self, key: &str) -> bool {
        matches!(self, Line::Text(text) if text == key)
    }

    /// Convert a found JSON value into a line; `None` for values that are not lines
    pub(crate) fn from_value(value: &Value) -> Option<Line> {
        match value {
            Value::String(text) => Some(Line::Text(text.clone())),
            Value::Array(items) if !items.is_empty() => {
                Some(Line::Forms(items.iter().map(value_text).collect()))
            }
            Value::Object(map) if !map.is_empty() => Some(Line::Group(map.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Text(text) => f.write_str(text),
            Line::Forms(forms) => f.write_str(&forms.join("|")),
            Line::Group(map) => write!(f, "{}", Value::Object(map.clone())),
        }
    }
}

impl PartialEq<str> for Line {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Line {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Find a value by dotted path
///
/// A literal key containing dots wins over descending into nested objects.
/// Returns `None` when any segment is missing or a non-object is reached
/// before the path ends.
pub fn lookup<'a>(messages: &'a Messages, path: &str) -> Option<&'a Value> {
    if let Some(value) = messages.get(path) {
        return Some(value);
    }

    let mut segments = path.split('.');
    let mut current = messages.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}

/// Set a value by dotted path, creating (or overwriting with) objects along the way
pub fn insert(messages: &mut Messages, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            messages.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let slot = messages
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Messages::new()));

            if let Value::Object(inner) = slot {
                insert(inner, rest, value);
            } else {
                let mut inner = Messages::new();
                insert(&mut inner, rest, value);
                *slot = Value::Object(inner);
            }
        }
    }
}
