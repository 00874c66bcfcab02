//! MCP Server implementation
//!
//! Reads newline-delimited JSON-RPC messages, dispatches them, and writes one
//! response line per request. Notifications get no response.

use serde::Deserialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use websearch_core::SearchProvider;

use crate::handlers::handle_tool_call;
use crate::protocol::{
    INTERNAL_ERROR, INVALID_REQUEST, InitializeResult, JsonRpcRequest, JsonRpcResponse,
    METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION, ServerCapabilities, ServerInfo, ToolCallParams,
    ToolsCapability,
};
use crate::tools::{ToolDefinition, ToolResult, get_tool_definitions};
use crate::{Error, Result};

/// MCP server exposing the `web_search` tool
///
/// # Example
///
/// ```ignore
/// use websearch_core::TavilyClient;
/// use websearch_mcp::WebSearchServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TavilyClient::new(std::env::var("TAVILY_API_KEY")?)?;
///     WebSearchServer::new(Box::new(client)).run().await?;
///     Ok(())
/// }
/// ```
pub struct WebSearchServer {
    provider: Box<dyn SearchProvider>,
    tools: Vec<ToolDefinition>,
}

impl WebSearchServer {
    /// Create a server that runs searches through `provider`
    pub fn new(provider: Box<dyn SearchProvider>) -> Self {
        Self {
            provider,
            tools: get_tool_definitions(),
        }
    }

    /// Serve MCP over the process's stdin/stdout until stdin closes
    pub async fn run(&self) -> Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve MCP over an arbitrary line-oriented stream pair
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!(tools = self.tools.len(), "MCP server ready, listening");

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            let reply = match self.handle_message(&line).await {
                Ok(response) => response,
                Err(Error::Json(e)) => {
                    tracing::warn!(error = %e, "Discarding unparseable message");
                    serde_json::to_string(&JsonRpcResponse::error(
                        None,
                        PARSE_ERROR,
                        format!("Parse error: {}", e),
                    ))?
                }
                Err(e) => serde_json::to_string(&JsonRpcResponse::error(
                    None,
                    INTERNAL_ERROR,
                    format!("Internal error: {}", e),
                ))?,
            };

            // Notifications produce no reply
            if reply.is_empty() {
                continue;
            }

            writer.write_all(reply.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the serialized JSON-RPC response, or an empty string for
    /// notifications. Malformed JSON is returned as [`Error::Json`]; valid JSON
    /// that is not a request gets an Invalid Request reply.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let value: Value = serde_json::from_str(message)?;

        let request: JsonRpcRequest = match JsonRpcRequest::deserialize(&value) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Rejecting malformed request");
                let id = value.get("id").filter(|id| !id.is_null()).cloned();
                let response = JsonRpcResponse::error(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid Request: {}", e),
                );
                return serde_json::to_string(&response).map_err(Error::from);
            }
        };

        // Notifications never get a reply, whatever the method
        if request.id.is_none() {
            tracing::debug!(method = %request.method, "Received notification");
            return Ok(String::new());
        }
        let id = request.id;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id)?,
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params).await,
            _ => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "websearch-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({ "tools": self.tools }))
    }

    /// Execute the requested tool; failures become JSON-RPC error objects
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        match self.call_tool(params).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => JsonRpcResponse::error(id, e.code(), e.to_string()),
        }
    }

    async fn call_tool(&self, params: Value) -> Result<Value> {
        let params: ToolCallParams =
            serde_json::from_value(params).map_err(|e| Error::InvalidParams(e.to_string()))?;

        let text = handle_tool_call(self.provider.as_ref(), &params.name, params.arguments).await?;
        Ok(serde_json::to_value(ToolResult::text(text))?)
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use websearch_core::{SearchRequest, SearchResponse};

    struct EmptyProvider;

    #[async_trait]
    impl SearchProvider for EmptyProvider {
        async fn search(&self, request: &SearchRequest) -> websearch_core::Result<SearchResponse> {
            Ok(SearchResponse {
                query: request.query().to_string(),
                ..Default::default()
            })
        }
    }

    fn server() -> WebSearchServer {
        WebSearchServer::new(Box::new(EmptyProvider))
    }

    async fn call(server: &WebSearchServer, request: &str) -> Value {
        serde_json::from_str(&server.handle_message(request).await.unwrap()).unwrap()
    }

    #[test]
    fn server_registers_tools_on_creation() {
        let server = server();
        let names: Vec<&str> = server.tools().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["web_search"]);
    }

    #[tokio::test]
    async fn test_handle_initialize() {
        let response = call(
            &server(),
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1.0"}}}"#,
        )
        .await;

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(response["result"]["serverInfo"]["name"], "websearch-mcp");
        assert!(response["result"]["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let server = server();
        for request in [
            r#"{"jsonrpc":"2.0","method":"initialized"}"#,
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            r#"{"jsonrpc":"2.0","method":"notifications/cancelled","params":{"requestId":3}}"#,
            r#"{"jsonrpc":"2.0","method":"$/progress"}"#,
            r#"{"jsonrpc":"2.0","method":"tools/list"}"#,
        ] {
            assert!(server.handle_message(request).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_handle_ping() {
        let response = call(&server(), r#"{"jsonrpc":"2.0","id":"p","method":"ping"}"#).await;
        assert_eq!(response["id"], "p");
        assert_eq!(response["result"], json!({}));
    }

    #[tokio::test]
    async fn test_handle_tools_list() {
        let response = call(
            &server(),
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}}"#,
        )
        .await;

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "web_search");
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["query"]));
    }

    #[tokio::test]
    async fn test_handle_unknown_method() {
        let response = call(
            &server(),
            r#"{"jsonrpc":"2.0","id":4,"method":"resources/list","params":{}}"#,
        )
        .await;

        assert_eq!(response["error"]["code"], -32601);
        assert!(
            response["error"]["message"]
                .as_str()
                .unwrap()
                .contains("resources/list")
        );
    }

    #[tokio::test]
    async fn test_handle_tools_call_unknown_tool() {
        let response = call(
            &server(),
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"unknown_tool","arguments":{}}}"#,
        )
        .await;

        assert_eq!(response["id"], 5);
        assert_eq!(response["error"]["code"], -32601);
        assert_eq!(response["error"]["message"], "unknown tool: unknown_tool");
        assert!(response.get("result").is_none());
    }

    #[tokio::test]
    async fn test_handle_tools_call_missing_query() {
        let response = call(
            &server(),
            r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"web_search","arguments":{}}}"#,
        )
        .await;

        assert_eq!(response["error"]["code"], -32602);
        assert!(
            response["error"]["message"]
                .as_str()
                .unwrap()
                .contains("query")
        );
    }

    #[tokio::test]
    async fn test_handle_tools_call_without_name() {
        let response = call(
            &server(),
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"arguments":{}}}"#,
        )
        .await;

        assert_eq!(response["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_handle_tools_call_success() {
        let response = call(
            &server(),
            r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"web_search","arguments":{"query":"empty"}}}"#,
        )
        .await;

        let content = &response["result"]["content"][0];
        assert_eq!(content["type"], "text");
        assert!(
            content["text"]
                .as_str()
                .unwrap()
                .starts_with("# Search Results for: \"empty\"")
        );
    }

    #[tokio::test]
    async fn test_request_without_method_is_invalid() {
        let response = call(&server(), r#"{"jsonrpc":"2.0","id":7}"#).await;
        assert_eq!(response["id"], 7);
        assert_eq!(response["error"]["code"], -32600);

        let response = call(&server(), r#"[1, 2, 3]"#).await;
        assert_eq!(response["id"], Value::Null);
        assert_eq!(response["error"]["code"], -32600);
    }

    #[tokio::test]
    async fn test_handle_invalid_json() {
        let result = server().handle_message(r#"{"invalid json"#).await;
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn serve_replies_per_request_and_survives_bad_lines() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            "\n",
            "not json at all\n",
            r#"{"jsonrpc":"2.0","method":"$/progress"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":7}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n",
        );
        let mut output = Vec::new();

        server().serve(input.as_bytes(), &mut output).await.unwrap();

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["id"], 1);
        assert_eq!(lines[1]["id"], Value::Null);
        assert_eq!(lines[1]["error"]["code"], -32700);
        assert_eq!(lines[2]["id"], 7);
        assert_eq!(lines[2]["error"]["code"], -32600);
        assert_eq!(lines[3]["id"], 2);
        assert_eq!(lines[3]["result"]["tools"][0]["name"], "web_search");
    }
}
