//! Heading level management
//!
//! Nested sections derive their heading level from the enclosing scope so
//! assistive technology sees a coherent document outline regardless of how
//! deeply components are composed. Levels clamp at 6, HTML's deepest
//! heading.

use serde::{Deserialize, Serialize};

pub const MAX_HEADING_LEVEL: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingScope {
    level: u8,
}

impl HeadingScope {
    /// Scope at an explicit level, clamped to 1..=6
    pub fn new(level: u8) -> Self {
        Self {
            level: level.clamp(1, MAX_HEADING_LEVEL),
        }
    }

    /// Document root scope (level 1)
    pub fn root() -> Self {
        Self::new(1)
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Scope for content nested one section deeper
    pub fn nested(&self) -> Self {
        Self::new(self.level.saturating_add(1))
    }

    /// Element tag for the current level ("h1".."h6")
    pub fn tag(&self) -> String {
        format!("h{}", self.level)
    }
}

impl Default for HeadingScope {
    fn default() -> Self {
        Self::root()
    }
}
