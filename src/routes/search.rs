use axum::{extract::State, routing::post, Json, Router};
use crate::models::{AppState, SearchRequest, SearchResponse};
use crate::routes::validation::ValidatedJson;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", post(search))
        .with_state(state)
}

/// POST /search - inline `{"results": [...]}`
pub async fn search(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SearchRequest>,
) -> Json<SearchResponse> {
    let results = state.search.search(&request.query).await;
    info!(count = results.len(), "Search request served");

    Json(SearchResponse { results })
}
