//! Configuration constants.
//!
//! Defaults for the outbound HTTP clients, the batch resolver and the server,
//! plus the fixed strings the API returns.

/// Per-request timeout in seconds for every outbound call
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Redirect handling
/// Maximum number of redirect hops followed by the primary resolver
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum number of URLs resolved at once within a single batch request
pub const DEFAULT_BATCH_CONCURRENCY: usize = 16;

/// Default listen address and port
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Hosts treated as link shorteners when deciding whether to run the fallback chain.
pub const DEFAULT_SHORTENER_HOSTS: &[&str] = &["t.co"];

/// Desktop browser identity sent on the primary resolution request.
///
/// Link shorteners sometimes serve an interstitial page to clients that do not
/// look like a browser, which would stop the redirect chain early.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Mobile browser identity used by the fallback retry
pub const DEFAULT_MOBILE_USER_AGENT: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Mobile/15E148 Safari/604.1";

// Request headers
pub const ACCEPT_HEADER_VALUE: &str = "text/html,application/xhtml+xml,application/xml";
pub const ACCEPT_LANGUAGE_HEADER_VALUE: &str = "en-US,en;q=0.9";

// Health endpoint payload
pub const SERVICE_STATUS: &str = "UP";
pub const SERVICE_MESSAGE: &str = "Link Expander API is running";
pub const SERVICE_FEATURES: &[&str] = &[
    "single-expansion",
    "batch-expansion",
    "multiple-url-expansion",
];
