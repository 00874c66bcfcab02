//! Error types for websearch-core

use std::error::Error as _;

/// Result type for websearch-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or executing a search
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The adapter cannot be constructed (missing credential, bad endpoint)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied arguments are malformed
    #[error("invalid arguments: {0}")]
    Validation(String),

    /// The provider answered with a structured error body
    #[error("provider error: {message}")]
    Provider { status: u16, message: String },

    /// The provider could not be reached or returned something unusable
    #[error("search failed: {0}")]
    Transport(String),
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's own Display hides the underlying cause (refused, timed out, ...)
        let mut description = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Transport(description)
    }
}
