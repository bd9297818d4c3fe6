//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_returns::ReturnsError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ReturnsError> for ApiError {
    fn from(err: ReturnsError) -> Self {
        match err {
            ReturnsError::InvalidInput(msg) => ApiError::Validation(msg),
            over_claimed @ ReturnsError::OverClaimed { .. } => ApiError::Conflict(over_claimed.to_string()),
        }
    }
}
