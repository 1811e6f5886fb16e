//! JSON body extractor with a uniform rejection.

use crate::errors::{AppError, ErrorCode};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON request body.
///
/// Unlike `axum::Json`, the `Content-Type` header is not inspected and every
/// failure (unreadable body, malformed JSON, a shape `T` does not accept)
/// rejects with `400 {"error": "invalid request"}`. Missing fields are left to
/// `T`'s serde attributes, and `JsonBody<Option<T>>` accepts a bare `null`.
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonBody;
///
/// async fn create(JsonBody(input): JsonBody<CreateItem>) -> String {
///     input.name
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

fn invalid_request() -> AppError {
    AppError::BadRequest(ErrorCode::InvalidJson.default_message().to_string())
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to buffer request body");
            invalid_request()
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::debug!(error = %e, "Failed to decode JSON body");
            invalid_request()
        })
    }
}
