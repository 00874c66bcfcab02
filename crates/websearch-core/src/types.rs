//! Data model shared by the request builder, provider client and renderer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default number of results requested from the provider
pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// Inclusive bounds accepted for `max_results`
pub const MAX_RESULTS_RANGE: std::ops::RangeInclusive<u32> = 1..=20;

/// How much effort the provider spends on a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

impl SearchDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!(
                "search_depth must be \"basic\" or \"advanced\", got \"{}\"",
                other
            )),
        }
    }
}

/// Outbound search request, exactly as serialized to the provider
///
/// Built through [`SearchRequest::from_arguments`](crate::SearchRequest::from_arguments)
/// or [`SearchRequest::new`]; optional domain filters are only present when the
/// caller set them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub(crate) query: String,
    pub(crate) search_depth: SearchDepth,
    pub(crate) include_answer: bool,
    pub(crate) max_results: u32,
    pub(crate) include_raw_content: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) include_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) exclude_domains: Option<Vec<String>>,
}

impl SearchRequest {
    /// Request for `query` with every optional field at its default
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_depth: SearchDepth::default(),
            include_answer: true,
            max_results: DEFAULT_MAX_RESULTS,
            include_raw_content: false,
            include_domains: None,
            exclude_domains: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_depth(&self) -> SearchDepth {
        self.search_depth
    }

    pub fn include_answer(&self) -> bool {
        self.include_answer
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    pub fn include_domains(&self) -> Option<&[String]> {
        self.include_domains.as_deref()
    }

    pub fn exclude_domains(&self) -> Option<&[String]> {
        self.exclude_domains.as_deref()
    }
}

/// A single hit as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub published_date: Option<String>,
}

/// Provider payload for one search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Query as echoed by the provider; rendering uses the caller's query instead
    pub query: String,
    #[serde(default)]
    pub answer: Option<String>,
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub follow_up_questions: Option<Vec<String>>,
    /// Provider-reported latency in seconds
    #[serde(default)]
    pub response_time: Option<f64>,
}
