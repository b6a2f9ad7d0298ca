//! `ValidatedJson` extractor: JSON body + `validator` rules, rejected as [`ApiError`].
//!
//! The body is decoded as JSON whatever the `Content-Type` header says.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        let Json(value) = Json::<T>::from_bytes(&body)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
