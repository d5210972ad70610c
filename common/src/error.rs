//! Error type definitions

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Submit error: {0}")]
    Submit(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
