//! Primary redirect resolution.

use log::{debug, info, warn};

use crate::app::normalize_url;
use crate::error_handling::categorize_reqwest_error;
use crate::expand::context::ExpansionContext;
use crate::expand::request::RequestHeaders;
use crate::expand::types::ResolveOutcome;

/// Follows redirects from `url` and reports where the chain ended.
///
/// The URL is normalized first (see [`normalize_url`]). Every HTTP status is
/// accepted: a 404 at the end of a chain is still the final destination.
///
/// Never fails. On a network error (timeout, DNS, TLS, refused connection, hop
/// limit exceeded) the **raw** input is returned and the failure is recorded
/// in the outcome.
pub async fn resolve(ctx: &ExpansionContext, url: &str) -> ResolveOutcome {
    follow_redirects(ctx, url, &ctx.settings.user_agent).await
}

/// Same as [`resolve`] but with an explicit User-Agent.
pub(crate) async fn follow_redirects(
    ctx: &ExpansionContext,
    url: &str,
    user_agent: &str,
) -> ResolveOutcome {
    let normalized = normalize_url(url);
    debug!("Resolving {} (as {})", normalized, user_agent);

    let result =
        RequestHeaders::apply_to_request_builder(ctx.client.get(&normalized), user_agent)
            .send()
            .await;

    match result {
        Ok(response) => {
            let final_url = response.url().to_string();
            if final_url != normalized {
                info!(
                    "Expanded {} -> {} (status {})",
                    url,
                    final_url,
                    response.status().as_u16()
                );
            } else {
                debug!(
                    "No redirect for {} (status {})",
                    url,
                    response.status().as_u16()
                );
            }
            ResolveOutcome::resolved(final_url)
        }
        Err(e) => {
            let error_type = categorize_reqwest_error(&e);
            warn!(
                "Error expanding URL {}: {} ({})",
                url,
                error_type.description(),
                e
            );
            ResolveOutcome::failed(url, error_type)
        }
    }
}
