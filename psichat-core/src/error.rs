//! Error types for the psichat core library.
//!
//! The affect operations themselves are total; only configuration loading and
//! the serialization helpers can fail.

use thiserror::Error;

/// Top-level error type for fallible psichat operations.
#[derive(Error, Debug)]
pub enum PsiError {
    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PsiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, PsiError>;
