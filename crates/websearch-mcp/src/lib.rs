//! MCP Server for web search
//!
//! This crate exposes a single `web_search` tool via the Model Context
//! Protocol, allowing AI assistants (Claude Desktop, Cursor, Windsurf, ...)
//! to query the Tavily search API and read the results as Markdown.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ websearch-mcp (protocol, registry, dispatch) ]
//!        | (Rust API)
//!        v
//! [ websearch-core (validation, provider client, rendering) ]
//!        | (HTTPS POST, bearer auth)
//!        v
//! [ search provider ]
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::Args;
pub use error::{Error, Result};
pub use server::WebSearchServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
