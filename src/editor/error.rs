//! Editor error types
//!
//! Errors raised at the boundary of the editor session. The session
//! operations themselves cannot fail.

use thiserror::Error;

/// Errors that can occur before input reaches an editor session
#[derive(Error, Debug)]
pub enum EditorError {
    /// An editor event could not be decoded
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    /// Writing goals with a zero target
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        EditorError::MalformedEvent(err.to_string())
    }
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
