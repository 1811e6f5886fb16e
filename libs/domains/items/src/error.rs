use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    /// No item is stored under the id
    #[error("item not found")]
    NotFound(String),

    /// The backing store failed. The in-memory store never produces this.
    #[error("store failure: {0}")]
    Store(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => AppError::NotFound(err.to_string()),
            ItemError::Store(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404_with_fixed_message() {
        let app_error: AppError = ItemError::NotFound("missing-id".to_string()).into();
        assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
        assert!(matches!(app_error, AppError::NotFound(ref msg) if msg == "item not found"));
    }

    #[test]
    fn test_store_failure_maps_to_500_with_message() {
        let app_error: AppError = ItemError::Store("connection reset".to_string()).into();
        assert_eq!(app_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            matches!(app_error, AppError::InternalServerError(ref msg) if msg == "store failure: connection reset")
        );
    }
}
