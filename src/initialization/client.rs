//! HTTP client initialization.
//!
//! This module provides functions to initialize the two HTTP clients used for
//! expansion: one that follows redirects and one that does not.

use std::sync::Arc;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the redirect-following HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration (desktop identity)
/// - Timeout from the configuration
/// - Redirect following enabled, up to `max_redirects` hops
///
/// Status codes are never turned into errors; the resolver only cares about
/// where the chain ended.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client used for the Location probe.
///
/// Creates a `reqwest::Client` with redirects disabled so the first hop's
/// `Location` header can be read directly.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
