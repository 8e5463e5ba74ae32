//! Tab descriptors
//!
//! A descriptor is the generated identity record for one tab/panel pair.
//! Identifiers are freshly allocated every time the child set changes, so
//! logical identity across regenerations is carried by `name`, not by id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Derived child metadata; the reconciliation key for the descriptor list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabItem {
    /// Display title of the tab control
    pub title: String,
    /// Stable logical name reported to activation callbacks
    pub name: String,
}

impl TabItem {
    pub fn new(title: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Generated id of the tab control element
    pub tab_id: String,
    /// Generated id of the associated panel element
    pub panel_id: String,
    pub title: String,
    pub name: String,
}

impl TabDescriptor {
    pub(crate) fn new(item: &TabItem) -> Self {
        Self {
            tab_id: Uuid::new_v4().to_string(),
            panel_id: Uuid::new_v4().to_string(),
            title: item.title.clone(),
            name: item.name.clone(),
        }
    }
}
