//! Fallback chain for shortener URLs the primary resolver could not move.
//!
//! Steps, in order, stopping at the first one that changes the URL:
//! 1. Location probe: one request with redirects disabled, reading `Location`.
//! 2. Mobile retry: the full redirect-following request with a mobile identity.
//! 3. Override table lookup.
//!
//! Every step absorbs its own failures; the best URL known so far is kept.

use log::{debug, info, warn};
use reqwest::Url;

use crate::app::{is_shortener_url, normalize_url};
use crate::error_handling::categorize_reqwest_error;
use crate::expand::context::ExpansionContext;
use crate::expand::request::RequestHeaders;
use crate::expand::resolver::{follow_redirects, resolve};
use crate::expand::types::ResolveOutcome;

/// Resolves `url`, then runs the fallback chain when the result is unchanged
/// and `url` is on a configured shortener host.
pub async fn resolve_with_fallback(ctx: &ExpansionContext, url: &str) -> ResolveOutcome {
    let primary = resolve(ctx, url).await;

    if !needs_fallback(url, &primary.url, &ctx.settings.shortener_hosts) {
        return primary;
    }

    info!("{} did not redirect, trying fallbacks", url);

    if let Some(location) = probe_location(ctx, url).await {
        info!("Location probe expanded {} -> {}", url, location);
        return ResolveOutcome::resolved(location);
    }

    let mobile = follow_redirects(ctx, url, &ctx.settings.mobile_user_agent).await;
    if mobile.is_success() && !is_unchanged(url, &mobile.url) {
        info!("Mobile retry expanded {} -> {}", url, mobile.url);
        return mobile;
    }

    if let Some(destination) = ctx.settings.overrides.lookup(url) {
        info!("Using override for {} -> {}", url, destination);
        return ResolveOutcome::resolved(destination);
    }

    debug!("All fallbacks left {} unchanged", url);
    primary
}

/// Issues one request with redirects disabled and returns its `Location`
/// header, resolved against the request URL when relative.
///
/// The header is read whatever the status; a 2xx/3xx is the expected case,
/// anything else is logged but still inspected. Returns `None` when the
/// request fails, no header is present, or it points back at the input.
pub(crate) async fn probe_location(ctx: &ExpansionContext, url: &str) -> Option<String> {
    let normalized = normalize_url(url);

    let response = match RequestHeaders::apply_to_request_builder(
        ctx.redirect_client.get(&normalized),
        &ctx.settings.user_agent,
    )
    .send()
    .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!(
                "Location probe failed for {}: {} ({})",
                url,
                categorize_reqwest_error(&e).description(),
                e
            );
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() && !status.is_redirection() {
        debug!(
            "Location probe for {} returned status {}",
            url,
            status.as_u16()
        );
    }

    let location = response
        .headers()
        .get(reqwest::header::LOCATION)?
        .to_str()
        .ok()?
        .trim();
    if location.is_empty() {
        return None;
    }

    let target = match Url::parse(location) {
        Ok(_) => location.to_string(),
        Err(_) => match Url::parse(&normalized).and_then(|base| base.join(location)) {
            Ok(joined) => joined.to_string(),
            Err(e) => {
                warn!("Unusable Location {:?} for {}: {}", location, url, e);
                return None;
            }
        },
    };

    if is_unchanged(url, &target) {
        None
    } else {
        Some(target)
    }
}

/// True when the primary result left a shortener URL where it started.
pub(crate) fn needs_fallback(original: &str, primary: &str, shortener_hosts: &[String]) -> bool {
    is_unchanged(original, primary) && is_shortener_url(original, shortener_hosts)
}

/// True when `candidate` is the raw input or the same URL as its normalized form.
pub(crate) fn is_unchanged(original: &str, candidate: &str) -> bool {
    if candidate == original {
        return true;
    }
    let normalized = normalize_url(original);
    if candidate == normalized {
        return true;
    }
    // "https://t.co" and "https://t.co/" are the same URL
    match (Url::parse(&normalized), Url::parse(candidate)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
