//! Attune Tab Container State Machine
//!
//! An ordered collection of tab/panel identity pairs with one active
//! selection. Descriptors are regenerated with fresh identifiers whenever
//! the derived (title, name) child list changes; arrow keys move selection
//! and focus (roving focus), wrapping at both ends. The machine runs for
//! the component's entire lifetime.

mod descriptor;
mod error;
mod key;
mod strip;

pub use descriptor::{TabDescriptor, TabItem};
pub use error::TabsError;
pub use key::{Key, KeyOutcome};
pub use strip::TabStrip;

pub type Result<T> = std::result::Result<T, TabsError>;
