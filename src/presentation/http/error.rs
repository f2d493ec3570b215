use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domain::employees::employee::EmployeeError;

/// HTTP wrapper for domain errors. Status mapping:
/// Validation -> 422, EmptyUpdate -> 400, NotFound -> 404, Storage -> 500.
#[derive(Debug)]
pub struct ApiError(pub EmployeeError);

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            EmployeeError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": "validation_error", "message": msg}),
            ),
            EmployeeError::EmptyUpdate => (
                StatusCode::BAD_REQUEST,
                json!({"error": "empty_update", "message": self.0.to_string()}),
            ),
            EmployeeError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({"error": "not_found", "message": self.0.to_string()}),
            ),
            EmployeeError::Storage(e) => {
                // Log the real cause, return a generic body.
                tracing::error!(error = ?e, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "internal_error", "message": "an internal error occurred"}),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
