use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog::CatalogError;
use common::ErrorBody;
use tracing::error;

use crate::observability;

/// Error leaving a handler; rendered as `{"error": "..."}` with `status`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        observability::STORE_ERRORS_TOTAL.with_label_values(&[e.kind()]).inc();
        let status = match e {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "request failed");
        }
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_map_to_statuses() {
        assert_eq!(ApiError::from(CatalogError::worker_not_found()).status, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(CatalogError::Validation("x".into())).status, StatusCode::BAD_REQUEST);
        let e = ApiError::from(CatalogError::Storage("pool timed out".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "pool timed out");
    }

    #[test]
    fn not_found_keeps_entity_message() {
        let e = ApiError::from(CatalogError::service_not_found());
        assert_eq!(e.message, "Service not found");
    }
}
