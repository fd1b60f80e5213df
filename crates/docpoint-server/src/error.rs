//! Error types for the HTTP API.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API result type.
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error type.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request payload failed validation (bad or empty base64).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The document could not be processed.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// The JSON body was rejected before reaching the handler.
    #[error("Invalid body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unprocessable(msg) => {
                tracing::warn!("Extraction failed: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
