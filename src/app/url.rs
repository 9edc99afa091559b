//! URL normalization and shortener-host matching.

/// Normalizes a URL by adding an `https://` prefix if it has no http(s) scheme.
///
/// No other validation is performed: malformed input passes through untouched
/// and is rejected later by the HTTP client.
///
/// # Examples
///
/// ```
/// use link_expander::normalize_url;
///
/// assert_eq!(normalize_url("t.co/abc123"), "https://t.co/abc123");
/// assert_eq!(normalize_url("http://t.co/abc123"), "http://t.co/abc123");
/// ```
pub fn normalize_url(url: &str) -> String {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    }
}

/// Returns true when `url` points at one of `shortener_hosts` or a subdomain of one.
///
/// Matching is done on the parsed host, so `reddit.com` does not match `t.co`.
/// Scheme-less input is normalized before parsing. Unparseable input never
/// matches.
pub fn is_shortener_url(url: &str, shortener_hosts: &[String]) -> bool {
    let Ok(parsed) = url::Url::parse(&normalize_url(url)) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();

    shortener_hosts.iter().any(|pattern| {
        let pattern = pattern.trim().to_ascii_lowercase();
        !pattern.is_empty()
            && (host == pattern
                || host
                    .strip_suffix(pattern.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.')))
    })
}
