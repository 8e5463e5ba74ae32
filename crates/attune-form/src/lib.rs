//! Attune Form State Coordination
//!
//! A shared registry of named field entries (value, validity, error text)
//! owned by one form scope. Field components clone the [`Form`] handle and
//! drive the registry exclusively through its operation contract; the raw
//! map is never exposed. Aggregate validity is recomputed on every mutation
//! that can affect it, and per-field errors stay hidden until the first
//! submit attempt unless the form is configured to always show them.

mod error;
mod field;
mod form;
pub mod validate;
mod value;

pub use error::FormError;
pub use field::{BoundField, FieldEntry};
pub use form::{Form, FormOptions, Submission};
pub use validate::{Validator, Verdict};
pub use value::{FieldValue, FormData};

pub type Result<T> = std::result::Result<T, FormError>;
