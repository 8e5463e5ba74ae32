//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Form error: {0}")]
    Form(#[from] attune_form::FormError),

    #[error("Tabs error: {0}")]
    Tabs(#[from] attune_tabs::TabsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
