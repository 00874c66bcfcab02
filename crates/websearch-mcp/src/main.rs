//! Web search MCP Server
//!
//! # Usage
//!
//! ```bash
//! TAVILY_API_KEY=tvly-... websearch-mcp [--endpoint <url>] [--timeout-secs <n>]
//! ```
//!
//! # Environment Variables
//!
//! - `TAVILY_API_KEY`: provider credential (required)
//! - `TAVILY_API_URL`: override the search endpoint
//! - `WEBSEARCH_TIMEOUT_SECS`: provider request timeout
//! - `RUST_LOG`: log verbosity (default: `websearch_mcp=info,websearch_core=info`)
//!
//! # Protocol
//!
//! JSON-RPC 2.0 over stdio: requests and responses on stdin/stdout, logs on
//! stderr so they never interleave with protocol traffic.

use clap::Parser;
use websearch_mcp::{Args, WebSearchServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("websearch_mcp=info".parse()?)
                .add_directive("websearch_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    tracing::info!(endpoint = %args.endpoint, "Starting websearch-mcp server");

    let client = args.into_client().inspect_err(|e| {
        tracing::error!(error = %e, "Refusing to start");
    })?;

    let server = WebSearchServer::new(Box::new(client));
    server.run().await?;

    Ok(())
}
