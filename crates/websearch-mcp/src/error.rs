//! Error types for the MCP server

use thiserror::Error;

use crate::protocol::{INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR};

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the search core (validation, provider, transport, configuration)
    #[error(transparent)]
    Core(#[from] websearch_core::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request params do not match the method's shape
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// Unknown tool requested
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// JSON-RPC error code reported to the client for a failed call
    pub fn code(&self) -> i32 {
        match self {
            Error::UnknownTool(_) => METHOD_NOT_FOUND,
            Error::InvalidParams(_) => INVALID_PARAMS,
            Error::Core(websearch_core::Error::Validation(_)) => INVALID_PARAMS,
            Error::Json(_) => PARSE_ERROR,
            _ => INTERNAL_ERROR,
        }
    }
}
