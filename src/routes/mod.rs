//! API Routes
//!
//! - `/search` - inline JSON results
//! - `/download/json`, `/download/csv` - file downloads
//! - `/health` - health check
//! - `/` - bundled search page

pub mod download;
pub mod health;
pub mod search;
pub mod static_files;
pub mod validation;

use axum::Router;
use std::path::Path;
use tower_http::trace::TraceLayer;
use crate::middleware::apply_cors;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
///
/// API routes take precedence over static files.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    info!("Creating application router");

    let api_router = Router::new()
        .merge(search::router(state.clone()))
        .merge(download::router(state.clone()))
        .merge(health::router(state));

    let app = Router::new()
        .merge(api_router)
        .merge(static_files::router(static_dir));

    apply_cors(app).layer(TraceLayer::new_for_http())
}
