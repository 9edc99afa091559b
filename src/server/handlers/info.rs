//! Health check, documentation page, and error fallbacks.

use axum::{response::Html, Json};

use super::super::types::HealthResponse;
use crate::config::{SERVICE_FEATURES, SERVICE_MESSAGE, SERVICE_STATUS};
use crate::error_handling::ApiError;

const DOCS_PAGE: &str = include_str!("../index.html");

/// `GET /api/health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: SERVICE_STATUS,
        message: SERVICE_MESSAGE,
        version: env!("CARGO_PKG_VERSION"),
        features: SERVICE_FEATURES,
    })
}

/// `GET /` static HTML documentation
pub async fn docs_handler() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// Known path, wrong method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Unknown path.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
