//! Web search adapter core
//!
//! Everything the MCP facade needs to run one search on behalf of a caller:
//!
//! - **Request building**: validate a loose JSON argument bag and apply
//!   defaults ([`SearchRequest::from_arguments`])
//! - **Provider client**: a single bearer-authenticated POST to the search
//!   API ([`TavilyClient`], behind the [`SearchProvider`] trait)
//! - **Rendering**: turn the provider payload into a Markdown document
//!   ([`render_results`])
//!
//! ```text
//!   arguments (JSON)
//!        |  SearchRequest::from_arguments
//!        v
//!   SearchRequest ---> SearchProvider::search ---> SearchResponse
//!                                                       |
//!                                          render_results v
//!                                                  Markdown text
//! ```

pub mod client;
pub mod error;
pub mod format;
pub mod request;
pub mod types;

pub use client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, SearchProvider, TavilyClient};
pub use error::{Error, Result};
pub use format::render_results;
pub use types::{
    DEFAULT_MAX_RESULTS, MAX_RESULTS_RANGE, SearchDepth, SearchRequest, SearchResponse,
    SearchResult,
};
