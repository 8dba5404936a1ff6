//! Error types shared across the workspace

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Named-entity recognizer failed or returned something unusable
    #[error("Recognizer error: {0}")]
    Recognizer(String),

    /// Transport failure talking to an external service
    #[error("HTTP error: {0}")]
    Http(String),

}

/// Result alias using the core error
pub type Result<T> = std::result::Result<T, Error>;
