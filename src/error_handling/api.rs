//! Errors returned by the HTTP handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Handler-level failure, rendered as a JSON error body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed client input (400).
    #[error("{0}")]
    BadRequest(&'static str),

    /// The path exists but does not accept this method (405).
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No route matches the path (404).
    #[error("Not found")]
    NotFound,

    /// Unexpected failure while handling a valid request (500).
    ///
    /// `context` is the stable summary shown in `error`; `message` carries the
    /// underlying cause.
    #[error("{context}: {message}")]
    Internal {
        /// Stable summary, e.g. "Failed to expand URL"
        context: &'static str,
        /// Underlying cause
        message: String,
    },
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::BadRequest(message) => json!({ "error": message }),
            ApiError::MethodNotAllowed => json!({ "error": "Method not allowed" }),
            ApiError::NotFound => json!({ "error": "Not found" }),
            ApiError::Internal { context, message } => {
                log::error!("{}: {}", context, message);
                json!({ "error": context, "message": message, "success": false })
            }
        };
        (status, Json(body)).into_response()
    }
}
