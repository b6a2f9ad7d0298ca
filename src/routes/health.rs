use axum::{extract::State, routing::get, Json, Router};
use crate::models::{AppState, HealthResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        provider_configured: state.search.is_configured(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
