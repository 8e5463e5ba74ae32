//! Disclosure widget state
//!
//! Expand/collapse state for a disclosure (show/hide) control. The host
//! mirrors `expanded` into `aria-expanded` on the trigger and shows or
//! hides the content region.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the state; returns the new value for the host's change
    /// callback.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        tracing::debug!(expanded = self.expanded, "Disclosure toggled");
        self.expanded
    }

    pub fn open(&mut self) {
        self.expanded = true;
    }

    pub fn close(&mut self) {
        self.expanded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed_by_default() {
        assert!(!Disclosure::default().expanded());
        assert!(Disclosure::new(true).expanded());
    }

    #[test]
    fn test_toggle_reports_new_state() {
        let mut disclosure = Disclosure::default();
        assert!(disclosure.toggle());
        assert!(!disclosure.toggle());
    }

    #[test]
    fn test_open_close_are_idempotent() {
        let mut disclosure = Disclosure::default();
        disclosure.open();
        disclosure.open();
        assert!(disclosure.expanded());
        disclosure.close();
        assert!(!disclosure.expanded());
    }
}
