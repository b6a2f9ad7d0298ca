// CORS configuration
// Every origin, method and header is allowed; the browser page may be hosted anywhere.

use tower_http::cors::{Any, CorsLayer};
use axum::Router;

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn apply_cors(router: Router) -> Router {
    router.layer(cors_layer())
}
