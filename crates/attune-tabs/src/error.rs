//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabsError {
    #[error("Tab not found: {0}")]
    TabNotFound(String),
}
