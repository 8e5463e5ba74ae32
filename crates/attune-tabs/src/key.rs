//! Keyboard protocol for the roving-focus tab strip

use serde::{Deserialize, Serialize};

/// Keys the tab strip reacts to; everything else maps to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowDown,
    Other,
}

/// What the host should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Selection moved: move focus to this tab control and fire the
    /// activation callback with `name`
    FocusTab { tab_id: String, name: String },
    /// Selection unchanged: move focus to the active tab's panel
    FocusPanel { panel_id: String },
    /// Key is not part of the protocol, or there are no tabs
    Ignored,
}
