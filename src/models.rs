use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::search::SerpApiClient;

#[derive(Clone)]
pub struct AppState {
    pub search: SerpApiClient,
}

// Request/response models shared by every endpoint

/// Body accepted by `/search`, `/download/json` and `/download/csv`.
///
/// Only the minimum length is checked; whitespace-only queries are forwarded as-is.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(
        min = 1,
        code = "string_too_short",
        message = "String should have at least 1 character"
    ))]
    pub query: String,
}

/// One normalized organic result. Every field is always serialized, `null` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// 1-based position in the provider's response
    pub rank: usize,
    pub title: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ResultItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider_configured: bool,
    pub timestamp: String,
}
