//! Integration tests for the primary redirect resolver.
//!
//! All requests go to a local axum mock site; no external network access.

mod helpers;

use helpers::{closed_port_url, start_mock_site, test_config, test_expander};
use link_expander::expand::resolve;
use link_expander::{ErrorType, Expander, Strategy};

#[tokio::test]
async fn test_resolves_to_final_landing_regardless_of_hop_count() {
    let addr = start_mock_site().await;
    let expander = test_expander();
    let landing = format!("http://{}/landing", addr);

    for hops in [1, 4, 8, 10] {
        let url = format!("http://{}/hop/{}", addr, hops);
        let outcome = resolve(expander.context(), &url).await;
        assert!(outcome.is_success(), "{} hops should resolve", hops);
        assert_eq!(outcome.url, landing, "{} hops should end at landing", hops);
    }
}

#[tokio::test]
async fn test_non_redirecting_url_resolves_to_itself() {
    let addr = start_mock_site().await;
    let expander = test_expander();
    let url = format!("http://{}/plain", addr);

    let outcome = resolve(expander.context(), &url).await;
    assert!(outcome.is_success());
    assert_eq!(outcome.url, url);
}

#[tokio::test]
async fn test_error_status_is_still_a_destination() {
    let addr = start_mock_site().await;
    let expander = test_expander();
    let url = format!("http://{}/missing", addr);

    let outcome = resolve(expander.context(), &url).await;
    assert!(outcome.is_success(), "404 must not count as a failure");
    assert_eq!(outcome.url, url);
}

#[tokio::test]
async fn test_connection_failure_returns_original_input() {
    let expander = test_expander();
    let url = closed_port_url("/nothing");

    let outcome = resolve(expander.context(), &url).await;
    assert_eq!(outcome.url, url);
    assert_eq!(outcome.failure, Some(ErrorType::HttpRequestConnectError));
}

#[tokio::test]
async fn test_failure_returns_unnormalized_input() {
    // No scheme: normalized to https://, which a plain-HTTP mock cannot serve.
    // The fallback must be the raw input, not the normalized form.
    let addr = start_mock_site().await;
    let expander = test_expander();
    let raw = format!("{}/plain", addr);

    let outcome = resolve(expander.context(), &raw).await;
    assert!(!outcome.is_success());
    assert_eq!(outcome.url, raw);
}

#[tokio::test]
async fn test_too_many_redirects_is_absorbed() {
    let addr = start_mock_site().await;
    let expander = test_expander();
    // One hop past the default limit of 10
    let url = format!("http://{}/hop/11", addr);

    let outcome = resolve(expander.context(), &url).await;
    assert_eq!(outcome.url, url);
    assert_eq!(outcome.failure, Some(ErrorType::HttpRequestRedirectError));
}

#[tokio::test]
async fn test_timeout_is_absorbed() {
    let addr = start_mock_site().await;
    let config = link_expander::Config {
        timeout_seconds: 1,
        ..test_config()
    };
    let expander = Expander::from_config(&config).expect("expander");
    let url = format!("http://{}/slow", addr);

    let outcome = resolve(expander.context(), &url).await;
    assert_eq!(outcome.url, url);
    assert_eq!(outcome.failure, Some(ErrorType::HttpRequestTimeoutError));
}

#[tokio::test]
async fn test_invalid_url_is_absorbed() {
    let expander = test_expander();

    let expanded = expander.expanded_url("not a url", Strategy::Direct).await;
    assert_eq!(expanded, "not a url");
    assert!(!expanded.is_empty());
}

#[tokio::test]
async fn test_single_expansion_always_reports_success() {
    let expander = test_expander();
    let url = closed_port_url("/nothing");

    let expansion = expander.expand(&url, Strategy::Direct).await;
    assert!(expansion.success);
    assert_eq!(expansion.original, url);
    assert_eq!(expansion.expanded, url);
    assert!(expansion.error.is_none());
}
