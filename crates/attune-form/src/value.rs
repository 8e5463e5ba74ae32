//! Field value representation
//!
//! Form controls carry one of three value shapes: free text (inputs,
//! textareas, single selects), a flag (checkboxes, switches), or a list of
//! selected options (multi-selects, checkbox groups).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flattened name -> value map; used to seed a form from external data and
/// as the submit success payload.
pub type FormData = HashMap<String, FieldValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// True when the control carries no user input
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Flag(checked) => !checked,
            FieldValue::List(items) => items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_text() {
        let value = FieldValue::default();
        assert_eq!(value, FieldValue::Text(String::new()));
        assert!(value.is_empty());
    }

    #[test]
    fn test_emptiness_per_shape() {
        assert!(FieldValue::text("   ").is_empty());
        assert!(!FieldValue::text("Rex").is_empty());
        assert!(FieldValue::Flag(false).is_empty());
        assert!(!FieldValue::Flag(true).is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::List(vec!["dog".to_string()]).is_empty());
    }
}
