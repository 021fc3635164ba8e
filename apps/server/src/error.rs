//! Maps core errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use budgetwise_core::errors::{DatabaseError, Error};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) | Error::Database(DatabaseError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::AlreadyExists(_) | Error::Database(DatabaseError::UniqueViolation(_)) => {
                StatusCode::CONFLICT
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Store failures are logged server-side and not echoed to clients.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self.0);
            "internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
