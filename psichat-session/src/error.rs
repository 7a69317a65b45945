//! Session error types.

use thiserror::Error;

/// Errors that can occur while running a chat turn.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The response source failed; the turn was not recorded.
    #[error("Response generation failed: {0}")]
    Response(String),

    /// The user sent nothing but whitespace.
    #[error("Empty message")]
    EmptyInput,

    /// Core library error (configuration, serialization).
    #[error(transparent)]
    Core(#[from] psichat_core::PsiError),

    /// Console I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
