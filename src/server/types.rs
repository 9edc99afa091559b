//! Request and response bodies for the HTTP API.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error_handling::ApiError;

/// Query for `GET /api/expand-url`
#[derive(Debug, Default, Deserialize)]
pub struct ExpandQuery {
    pub url: Option<String>,
}

/// Query for `GET /api/expand-multiple`
#[derive(Debug, Default, Deserialize)]
pub struct MultipleQuery {
    /// Comma-separated URLs
    pub urls: Option<String>,
}

/// Body for `POST /api/expand`
#[derive(Debug, Default, Deserialize)]
pub struct ExpandRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Body for `POST /api/expand-batch`
///
/// `urls` is kept loosely typed so a non-array value gets the endpoint's own
/// message rather than a generic parse error.
#[derive(Debug, Default, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub urls: Option<serde_json::Value>,
}

impl BatchRequest {
    /// The URL list, if `urls` is a non-empty array of strings.
    pub fn into_urls(self) -> Option<Vec<String>> {
        let urls: Vec<String> = serde_json::from_value(self.urls?).ok()?;
        if urls.is_empty() {
            None
        } else {
            Some(urls)
        }
    }
}

/// JSON response for `/api/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
}

/// Parses a JSON request body, treating an empty body as `T::default()`.
///
/// Bodies are read as raw bytes rather than through `axum::Json` so a missing
/// body or content type produces the endpoint's own "required" message.
pub fn parse_json_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("Rejecting request body: {}", e);
        ApiError::BadRequest("Invalid JSON body")
    })
}

/// Unwraps a query extraction, turning axum's plain-text rejection (for
/// example a duplicated parameter) into a JSON 400.
pub fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            log::debug!("Rejecting query string: {}", rejection.body_text());
            Err(ApiError::BadRequest("Invalid query string"))
        }
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub fn split_url_list(urls: &str) -> Vec<String> {
    urls.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
