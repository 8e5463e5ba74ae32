//! Attune Core
//!
//! Aggregation layer for the attune widget-state crates: one error type,
//! logging setup, and the small standalone widget states (disclosure,
//! heading levels) that need no coordinator of their own.

mod disclosure;
mod error;
mod heading;

pub use disclosure::Disclosure;
pub use error::CoreError;
pub use heading::{HeadingScope, MAX_HEADING_LEVEL};

// Re-export the subsystem crates
pub use attune_form::{
    validate, BoundField, FieldEntry, FieldValue, Form, FormData, FormError, FormOptions,
    Submission, Validator, Verdict,
};
pub use attune_tabs::{Key, KeyOutcome, TabDescriptor, TabItem, TabStrip, TabsError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
