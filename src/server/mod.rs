//! HTTP API server.
//!
//! Endpoints:
//! - `GET  /api/expand-url?url=...` - single URL, with shortener fallbacks
//! - `POST /api/expand` - single URL from a JSON body
//! - `POST /api/expand-batch` - JSON array of URLs
//! - `GET  /api/expand-multiple?urls=a,b` - comma-separated URLs
//! - `GET  /api/health` - service info
//! - `GET  /` - HTML documentation
//!
//! Any other method on these paths gets a 405, unknown paths a 404, and every
//! response carries permissive CORS headers.

mod cors;
mod handlers;
mod types;

use axum::routing::{get, post};
use axum::{middleware, Router};
use tokio::net::TcpListener;

use crate::app::shutdown_signal;
use crate::expand::Expander;
use handlers::{
    docs_handler, expand_batch_handler, expand_handler, expand_multiple_handler,
    expand_url_handler, health_handler, method_not_allowed, not_found,
};
pub use types::{BatchRequest, ExpandQuery, ExpandRequest, HealthResponse, MultipleQuery};

/// Builds the application router around a shared [`Expander`].
pub fn build_router(expander: Expander) -> Router {
    Router::new()
        .route("/", get(docs_handler).fallback(method_not_allowed))
        .route(
            "/api/expand-url",
            get(expand_url_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/expand",
            post(expand_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/expand-batch",
            post(expand_batch_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/expand-multiple",
            get(expand_multiple_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/health",
            get(health_handler).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(cors::cors_middleware))
        .with_state(expander)
}

/// Serves the API on `listener` until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, expander: Expander) -> Result<(), anyhow::Error> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("Link expander listening on http://{}/", addr);
        log::info!("  - Docs: http://{}/", addr);
        log::info!("  - Health: http://{}/api/health", addr);
    }

    axum::serve(listener, build_router(expander))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}
