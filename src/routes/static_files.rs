//! Static File Serving
//!
//! Serves the bundled search page (`index.html` + `app.js`) from the
//! configured directory, or from `static/` next to the working directory.

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Locate the static directory: explicit configuration first, then well-known paths
pub fn resolve_static_dir(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = configured {
        if dir.is_dir() {
            return Some(dir.to_path_buf());
        }
        warn!(path = %dir.display(), "Configured STATIC_DIR does not exist");
    }

    let candidates = [PathBuf::from("static"), PathBuf::from("../static")];
    candidates.into_iter().find(|path| path.is_dir())
}

/// Create router for serving the search page
pub fn router(configured: Option<&Path>) -> Router {
    match resolve_static_dir(configured) {
        Some(dir) => {
            info!(path = %dir.display(), "Serving static files");
            Router::new().fallback_service(
                ServeDir::new(dir).append_index_html_on_directories(true),
            )
        }
        None => {
            warn!("Static files directory not found, serving API landing page");
            Router::new().route("/", get(landing_page))
        }
    }
}

async fn landing_page() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-cache")],
        Html(
            r#"<!DOCTYPE html>
<html lang="cs">
<head><meta charset="UTF-8"><title>serp-export</title></head>
<body>
  <h1>serp-export</h1>
  <p>The search page is not bundled with this deployment. API endpoints:</p>
  <ul>
    <li><code>POST /search</code></li>
    <li><code>POST /download/json</code></li>
    <li><code>POST /download/csv</code></li>
    <li><code>GET /health</code></li>
  </ul>
  <pre>curl -X POST http://127.0.0.1:8000/search \
  -H "Content-Type: application/json" \
  -d '{"query": "rust"}'</pre>
</body>
</html>"#,
        ),
    )
}
