//! MCP Tool Handlers
//!
//! Dispatches `tools/call` requests to the search core.

use serde_json::Value;
use websearch_core::{SearchProvider, SearchRequest, render_results};

use crate::tools::WEB_SEARCH;
use crate::{Error, Result};

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(
    provider: &dyn SearchProvider,
    tool_name: &str,
    arguments: Value,
) -> Result<String> {
    match tool_name {
        WEB_SEARCH => handle_web_search(provider, arguments).await,
        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

/// Handle web_search - validate, query the provider, render Markdown
async fn handle_web_search(provider: &dyn SearchProvider, arguments: Value) -> Result<String> {
    let request = SearchRequest::from_arguments(&arguments)?;

    tracing::info!(
        query = request.query(),
        depth = %request.search_depth(),
        max_results = request.max_results(),
        "Running web search"
    );

    let response = provider.search(&request).await.inspect_err(|e| {
        tracing::warn!(query = request.query(), error = %e, "Web search failed");
    })?;

    Ok(render_results(&request, &response))
}
