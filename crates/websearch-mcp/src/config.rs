//! Process configuration
//!
//! Everything is read once at startup, from flags or the environment, and
//! turned into a ready-to-use provider client. A missing credential stops the
//! process before the protocol loop starts.

use std::time::Duration;

use clap::Parser;
use websearch_core::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, TavilyClient};

/// MCP server exposing a web_search tool
#[derive(Parser)]
#[command(name = "websearch-mcp")]
#[command(about = "MCP server exposing a web_search tool backed by the Tavily search API")]
#[command(version)]
pub struct Args {
    /// API key for the search provider
    #[arg(long, env = "TAVILY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Search endpoint URL
    #[arg(long, env = "TAVILY_API_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Provider request timeout in seconds
    #[arg(long, env = "WEBSEARCH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,
}

impl Args {
    /// Build the provider client, failing if no credential was supplied
    pub fn into_client(self) -> websearch_core::Result<TavilyClient> {
        let api_key = self.api_key.ok_or_else(|| {
            websearch_core::Error::Configuration(
                "TAVILY_API_KEY environment variable is required".to_string(),
            )
        })?;

        TavilyClient::with_options(api_key, self.endpoint, Duration::from_secs(self.timeout_secs))
    }
}
