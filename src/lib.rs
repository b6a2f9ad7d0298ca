// serp-export - search proxy with JSON and CSV downloads

pub mod config;
pub mod error;
pub mod export;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod search;    // SerpAPI gateway

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;
pub use routes::create_router;
