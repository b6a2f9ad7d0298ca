//! SerpAPI Client
//!
//! Fetches Google web results through SerpAPI and maps the organic hits to
//! ranked [`ResultItem`]s.
//!
//! ## Failure policy
//!
//! [`SerpApiClient::search`] is fail-open: a missing API key, a transport
//! error, a timeout, a non-success status or an unreadable body all yield an
//! empty result list. Callers that need the cause use
//! [`SerpApiClient::fetch_organic`] instead.

use crate::config::SearchConfig;
use crate::models::ResultItem;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Upper bound for a single provider round trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const ENGINE: &str = "google";
const RESULT_COUNT: &str = "10";
const LANGUAGE: &str = "cs";

/// Errors that can occur during search operations
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("SerpAPI key not configured")]
    NoApiKey,

    #[error("Search request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("SerpAPI returned status {status}")]
    Provider { status: StatusCode },

    #[error("Failed to parse search results: {0}")]
    ParseError(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Raw SerpAPI payload. Entries stay untyped so one odd field only affects its own hit.
#[derive(Debug, Default, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Option<Vec<Value>>,
    #[serde(default)]
    error: Option<Value>,
}

/// SerpAPI gateway. Clones share one connection pool.
#[derive(Clone)]
pub struct SerpApiClient {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl SerpApiClient {
    /// Create a client against the default endpoint
    pub fn new(api_key: Option<String>) -> Result<Self, SearchError> {
        Self::from_config(&SearchConfig {
            serpapi_key: api_key,
            ..SearchConfig::default()
        })
    }

    /// Configure client from config
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    /// Same as [`Self::from_config`] with a custom request timeout
    pub fn with_timeout(config: &SearchConfig, timeout: Duration) -> Result<Self, SearchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Client(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.serpapi_key.clone(),
        })
    }

    /// Whether an API key is present; without one no request is ever sent
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search and collapse every failure into an empty result list
    pub async fn search(&self, query: &str) -> Vec<ResultItem> {
        match self.fetch_organic(query).await {
            Ok(results) => results,
            Err(SearchError::NoApiKey) => {
                debug!("SerpAPI key not configured, returning no results");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Search failed, returning no results");
                Vec::new()
            }
        }
    }

    /// Run one provider request and map its organic results
    pub async fn fetch_organic(&self, query: &str) -> Result<Vec<ResultItem>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::NoApiKey)?;

        info!(query = %query, "Searching Google via SerpAPI");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("engine", ENGINE),
                ("q", query),
                ("num", RESULT_COUNT),
                ("hl", LANGUAGE),
                ("api_key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Provider { status });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Raw SerpAPI response received");

        let parsed: SerpApiResponse = serde_json::from_slice(&body)
            .map_err(|e| SearchError::ParseError(e.to_string()))?;

        if let Some(message) = parsed.error.as_ref().and_then(|v| v.as_str()) {
            warn!(error = %message, "SerpAPI reported an error");
        }

        let results = rank_results(parsed.organic_results.unwrap_or_default());
        info!(count = results.len(), "SerpAPI search completed");
        Ok(results)
    }
}

/// Assign 1-based ranks in provider order
fn rank_results(organic: Vec<Value>) -> Vec<ResultItem> {
    organic
        .iter()
        .enumerate()
        .map(|(index, hit)| ResultItem {
            rank: index + 1,
            title: text_field(hit, "title"),
            url: text_field(hit, "link"),
            snippet: text_field(hit, "snippet"),
        })
        .collect()
}

/// String value of `key`; missing, null or non-string values read as `None`
fn text_field(hit: &Value, key: &str) -> Option<String> {
    hit.get(key)
        .and_then(|v| v.as_str())
        .map(String::from)
}
