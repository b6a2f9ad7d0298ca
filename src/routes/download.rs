//! File downloads of a result set
//!
//! - POST /download/json - pretty-printed JSON array, `results.json`
//! - POST /download/csv - CSV with a `rank,title,url,snippet` header, `results.csv`

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use crate::error::ApiError;
use crate::export::{self, CSV_FILENAME, JSON_FILENAME};
use crate::models::{AppState, SearchRequest};
use crate::routes::validation::ValidatedJson;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/download/json", post(download_json))
        .route("/download/csv", post(download_csv))
        .with_state(state)
}

async fn download_json(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SearchRequest>,
) -> Result<Response, ApiError> {
    let results = state.search.search(&request.query).await;
    let body = export::results_to_json(&results)?;
    info!(count = results.len(), bytes = body.len(), "JSON download served");

    Ok(attachment(mime::APPLICATION_JSON.as_ref(), JSON_FILENAME, body))
}

async fn download_csv(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SearchRequest>,
) -> Result<Response, ApiError> {
    let results = state.search.search(&request.query).await;
    let body = export::results_to_csv(&results)?;
    info!(count = results.len(), bytes = body.len(), "CSV download served");

    Ok(attachment(mime::TEXT_CSV_UTF_8.as_ref(), CSV_FILENAME, body))
}

fn attachment(content_type: &str, filename: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        body,
    )
        .into_response()
}
