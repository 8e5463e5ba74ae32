//! Form error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
}
