//! Search Module
//!
//! Provider gateway for general web search. SerpAPI is the only backend;
//! its organic results are normalized into [`crate::models::ResultItem`].

pub mod serpapi;

pub use serpapi::{SerpApiClient, SearchError};
