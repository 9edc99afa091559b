//! Outbound request building.

use crate::config::{ACCEPT_HEADER_VALUE, ACCEPT_LANGUAGE_HEADER_VALUE};

/// Browser-like request headers sent on every expansion request.
///
/// Shorteners may answer non-browser clients with an interstitial page instead
/// of a redirect, so requests carry a browser identity and the usual Accept
/// headers.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard Accept headers and the given User-Agent.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
        user_agent: &str,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::USER_AGENT, user_agent)
            .header(reqwest::header::ACCEPT, ACCEPT_HEADER_VALUE)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_HEADER_VALUE)
    }
}
