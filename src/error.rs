//! HTTP-facing errors.
//!
//! Validation failures are answered with a `detail` list, one entry per
//! violated constraint, e.g.
//! `{"detail":[{"type":"string_too_short","loc":["body","query"],"msg":"..."}]}`.

use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::export::ExportError;

/// One entry of a validation error payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<String>,
    pub msg: String,
}

impl Violation {
    fn body(kind: &str, msg: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            loc: vec!["body".to_string()],
            msg: msg.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    detail: Vec<Violation>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation {
        status: StatusCode,
        violations: Vec<Violation>,
    },

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { status, .. } => *status,
            ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<Violation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| Violation {
                    kind: err.code.to_string(),
                    loc: vec!["body".to_string(), field.to_string()],
                    msg: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field)),
                })
            })
            .collect();
        violations.sort_by(|a, b| a.loc.cmp(&b.loc));

        ApiError::Validation {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            violations,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let (status, kind) = match &rejection {
            JsonRejection::JsonSyntaxError(_) => (StatusCode::UNPROCESSABLE_ENTITY, "json_invalid"),
            JsonRejection::JsonDataError(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "model_attributes_type")
            }
            _ => (rejection.status(), "body_unreadable"),
        };

        ApiError::Validation {
            status,
            violations: vec![Violation::body(kind, rejection.body_text())],
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            violations: vec![Violation::body("body_unreadable", rejection.body_text())],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation { violations, .. } => {
                (status, Json(ValidationBody { detail: violations })).into_response()
            }
            ApiError::Export(e) => {
                error!(error = %e, "Failed to encode download");
                (
                    status,
                    Json(serde_json::json!({
                        "error": "Failed to encode results",
                        "details": e.to_string()
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchRequest;
    use validator::Validate;

    #[test]
    fn test_validation_errors_map_to_query_violation() {
        let errors = SearchRequest { query: String::new() }.validate().unwrap_err();
        let api_error = ApiError::from(errors);

        assert_eq!(api_error.status(), StatusCode::UNPROCESSABLE_ENTITY);
        match api_error {
            ApiError::Validation { violations, .. } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].kind, "string_too_short");
                assert_eq!(violations[0].loc, vec!["body", "query"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_violation_serializes_type_key() {
        let value = serde_json::to_value(Violation::body("json_invalid", "bad")).unwrap();
        assert_eq!(value["type"], "json_invalid");
        assert_eq!(value["loc"], serde_json::json!(["body"]));
    }
}
