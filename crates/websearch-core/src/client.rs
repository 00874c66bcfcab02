//! Provider client
//!
//! One POST per search, bearer-authenticated, no retries. Failures come back
//! tagged as either [`Error::Provider`] (the provider explained itself in a
//! structured body) or [`Error::Transport`] (everything else).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::types::{SearchRequest, SearchResponse};
use crate::{Error, Result};

/// Production search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.tavily.com/search";

/// Applied when the caller does not configure a timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can execute a [`SearchRequest`]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one search against the provider
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}

/// Client for the Tavily search API
///
/// The credential is captured at construction and never re-read.
pub struct TavilyClient {
    client: Client,
    api_key: SecretString,
    endpoint: String,
}

impl std::fmt::Debug for TavilyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TavilyClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl TavilyClient {
    /// Create a client for the default endpoint.
    ///
    /// Fails with [`Error::Configuration`] when the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit endpoint and request timeout
    pub fn with_options(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Configuration(
                "search API key is missing or empty".to_string(),
            ));
        }

        let endpoint = endpoint.into();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(Error::Configuration(format!(
                "search endpoint must be an http(s) URL, got \"{}\"",
                endpoint
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("websearch-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: SecretString::from(api_key),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        tracing::debug!(
            query = request.query(),
            depth = %request.search_depth(),
            max_results = request.max_results(),
            "Sending search request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(classify_failure(status.as_u16(), &body));
        }

        let invalid_body = |e: serde_json::Error| {
            Error::Transport(format!("invalid response body: {}", e))
        };
        let payload: Value = serde_json::from_slice(&body).map_err(invalid_body)?;

        // Some failures arrive with a 2xx status and an error body
        if let Some(message) = provider_message(&payload) {
            return Err(Error::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = serde_json::from_value(payload).map_err(invalid_body)?;

        tracing::debug!(
            echoed_query = %parsed.query,
            results = parsed.results.len(),
            response_time = ?parsed.response_time,
            "Search request completed"
        );

        Ok(parsed)
    }
}

/// Decide whether a non-2xx response carries a provider-authored message
fn classify_failure(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(provider_message)
    {
        Some(message) => Error::Provider { status, message },
        None => Error::Transport(format!("provider returned HTTP {}", status)),
    }
}

fn provider_message(body: &Value) -> Option<String> {
    let text = |v: &Value| v.as_str().map(str::to_string);

    body.get("error")
        .and_then(text)
        .or_else(|| body.get("detail").and_then(|d| d.get("error")).and_then(text))
        .or_else(|| body.get("detail").and_then(text))
        .or_else(|| body.get("message").and_then(text))
}
