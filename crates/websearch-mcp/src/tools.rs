//! Tool registry
//!
//! The server advertises a single tool, `web_search`. The schema mirrors the
//! defaults applied by [`websearch_core::SearchRequest::from_arguments`].

use serde::{Deserialize, Serialize};
use websearch_core::{DEFAULT_MAX_RESULTS, MAX_RESULTS_RANGE};

/// Name under which the search tool is registered
pub const WEB_SEARCH: &str = "web_search";

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
        }
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![ToolDefinition {
        name: WEB_SEARCH.to_string(),
        description: "Search the web for current information. Returns ranked results with \
                      titles, URLs, content snippets and relevance scores, plus an optional \
                      direct answer and follow-up questions."
            .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "search_depth": {
                    "type": "string",
                    "enum": ["basic", "advanced"],
                    "description": "Depth of the search: basic is faster, advanced is more thorough",
                    "default": "basic"
                },
                "include_answer": {
                    "type": "boolean",
                    "description": "Include a direct answer synthesized from the results",
                    "default": true
                },
                "max_results": {
                    "type": "number",
                    "description": "Maximum number of results to return",
                    "minimum": MAX_RESULTS_RANGE.start(),
                    "maximum": MAX_RESULTS_RANGE.end(),
                    "default": DEFAULT_MAX_RESULTS
                },
                "include_domains": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Only return results from these domains"
                },
                "exclude_domains": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Never return results from these domains"
                }
            },
            "required": ["query"]
        }),
    }]
}
