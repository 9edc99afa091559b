//! Single-URL expansion handlers.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use super::super::types::{parse_json_body, parse_query, ExpandQuery, ExpandRequest};
use crate::error_handling::ApiError;
use crate::expand::{Expander, Expansion, Strategy};

/// `GET /api/expand-url?url=...`, with the shortener fallback chain.
pub async fn expand_url_handler(
    State(expander): State<Expander>,
    query: Result<Query<ExpandQuery>, QueryRejection>,
) -> Result<Json<Expansion>, ApiError> {
    let query = parse_query(query)?;
    let url = required(query.url, "URL parameter is required")?;
    expand_single(expander, url, Strategy::WithFallback).await
}

/// `POST /api/expand` with body `{"url": "..."}`.
pub async fn expand_handler(
    State(expander): State<Expander>,
    body: Bytes,
) -> Result<Json<Expansion>, ApiError> {
    let request: ExpandRequest = parse_json_body(&body)?;
    let url = required(request.url, "URL is required")?;
    expand_single(expander, url, Strategy::Direct).await
}

fn required(value: Option<String>, message: &'static str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest(message)),
    }
}

async fn expand_single(
    expander: Expander,
    url: String,
    strategy: Strategy,
) -> Result<Json<Expansion>, ApiError> {
    // Own task so a panic while resolving becomes a 500 instead of a dropped connection
    let expansion = tokio::spawn(async move { expander.expand(&url, strategy).await })
        .await
        .map_err(|e| ApiError::Internal {
            context: "Failed to expand URL",
            message: e.to_string(),
        })?;
    Ok(Json(expansion))
}
