// Shared test helpers: a mock redirecting site and expander construction.
//
// Included by the integration test files via `mod helpers;`, so not every
// helper is used by every file.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

use link_expander::expand::{ExpansionContext, ResolverSettings};
use link_expander::initialization::{init_client, init_redirect_client};
use link_expander::{Config, Expander, OverrideTable};

/// Serves `router` on an ephemeral localhost port and returns the address.
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock server failed");
    });
    addr
}

/// Starts a mock site with these paths:
///
/// - `/hop/{n}`: redirects `n` times, ending at `/landing`
/// - `/landing`, `/plain`: 200, no redirect
/// - `/missing`: 404, no redirect
/// - `/loop-a` <-> `/loop-b`: endless relative redirects
/// - `/dead-end`: redirects to a closed port
/// - `/mobile-only`: redirects to `/landing-mobile` only for mobile User-Agents
/// - `/slow`: answers after 3 seconds
pub async fn start_mock_site() -> SocketAddr {
    let router = Router::new()
        .route(
            "/hop/{n}",
            get(|Path(n): Path<usize>| async move {
                if n > 1 {
                    Redirect::temporary(&format!("/hop/{}", n - 1))
                } else {
                    Redirect::temporary("/landing")
                }
            }),
        )
        .route("/landing", get(|| async { "landed" }))
        .route("/landing-mobile", get(|| async { "landed on mobile" }))
        .route("/plain", get(|| async { "no redirect here" }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "not found") }),
        )
        .route("/loop-a", get(|| async { Redirect::temporary("/loop-b") }))
        .route("/loop-b", get(|| async { Redirect::temporary("/loop-a") }))
        .route(
            "/dead-end",
            get(|| async { Redirect::temporary(&closed_port_url("/gone")) }),
        )
        .route("/mobile-only", get(mobile_only))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                "finally"
            }),
        );
    spawn_router(router).await
}

async fn mobile_only(headers: HeaderMap) -> Response {
    let is_mobile = headers
        .get(header::USER_AGENT)
        .and_then(|ua| ua.to_str().ok())
        .is_some_and(|ua| ua.contains("Mobile"));
    if is_mobile {
        Redirect::temporary("/landing-mobile").into_response()
    } else {
        "desktop page".into_response()
    }
}

/// A URL on a localhost port nothing listens on (port 1 is never bound in tests).
pub fn closed_port_url(path: &str) -> String {
    format!("http://127.0.0.1:1{}", path)
}

/// Configuration treating the mock site's host as a shortener, with short timeouts.
pub fn test_config() -> Config {
    Config {
        timeout_seconds: 2,
        shortener_hosts: vec!["127.0.0.1".to_string()],
        ..Default::default()
    }
}

pub fn test_expander() -> Expander {
    Expander::from_config(&test_config()).expect("Failed to build expander")
}

/// Expander built from `config` with an explicit override table.
pub fn expander_with_overrides(config: &Config, overrides: OverrideTable) -> Expander {
    let client = init_client(config).expect("Failed to build client");
    let redirect_client = init_redirect_client(config).expect("Failed to build redirect client");
    Expander::new(ExpansionContext::new(
        client,
        redirect_client,
        ResolverSettings::new(config, overrides),
    ))
}
