//! Errors surfaced by task stores.
//!
//! Every backend returns the same kinds so callers can match on them without
//! knowing which store produced the error.

use thiserror::Error;

use crate::model::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Invalid task title")]
    InvalidTitle,

    #[error("Invalid task description")]
    InvalidDescription,

    #[error("Task not found: {0}")]
    NotFound(TaskId),

    /// The request never produced an HTTP response (connect failure, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status other than 404.
    #[error("Backend returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Whether the error came from talking to a remote backend rather than
    /// from the task rules themselves.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            StoreError::Transport(_) | StoreError::Api { .. } | StoreError::Decode(_)
        )
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StoreError::Decode(e.to_string())
        } else if e.is_timeout() {
            StoreError::Transport(format!("Request timeout: {}", e))
        } else if e.is_connect() {
            StoreError::Transport(format!("Connection failed: {}", e))
        } else {
            StoreError::Transport(format!("Request failed: {}", e))
        }
    }
}
