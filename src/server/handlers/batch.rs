//! Multi-URL expansion handlers.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use super::super::types::{
    parse_json_body, parse_query, split_url_list, BatchRequest, MultipleQuery,
};
use crate::error_handling::ApiError;
use crate::expand::{BatchReport, Expander, Strategy};

/// `POST /api/expand-batch` with body `{"urls": [...]}`.
pub async fn expand_batch_handler(
    State(expander): State<Expander>,
    body: Bytes,
) -> Result<Json<BatchReport>, ApiError> {
    let request: BatchRequest = parse_json_body(&body)?;
    let urls = request
        .into_urls()
        .ok_or(ApiError::BadRequest("URLs array is required"))?;
    run_batch(expander, urls).await
}

/// `GET /api/expand-multiple?urls=a,b,c`
pub async fn expand_multiple_handler(
    State(expander): State<Expander>,
    query: Result<Query<MultipleQuery>, QueryRejection>,
) -> Result<Json<BatchReport>, ApiError> {
    let query = parse_query(query)?;
    let raw = match query.urls {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return Err(ApiError::BadRequest(
                "URLs parameter is required (comma-separated)",
            ))
        }
    };
    let urls = split_url_list(&raw);
    if urls.is_empty() {
        return Err(ApiError::BadRequest("No valid URLs provided"));
    }
    run_batch(expander, urls).await
}

async fn run_batch(expander: Expander, urls: Vec<String>) -> Result<Json<BatchReport>, ApiError> {
    let report = tokio::spawn(async move { expander.expand_batch(urls, Strategy::Direct).await })
        .await
        .map_err(|e| ApiError::Internal {
            context: "Failed to process batch request",
            message: e.to_string(),
        })?;
    log::info!(
        "Batch of {} URL(s): {} succeeded, {} failed",
        report.total,
        report.succeeded,
        report.failed
    );
    Ok(Json(report))
}
