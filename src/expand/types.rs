//! Expansion result types.

use serde::Serialize;

use crate::error_handling::ErrorType;

/// Where a single resolver attempt ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Final URL reached, or the raw input when the attempt failed
    pub url: String,
    /// Set when the attempt hit a network failure and fell back to the input
    pub failure: Option<ErrorType>,
}

impl ResolveOutcome {
    pub(crate) fn resolved(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            failure: None,
        }
    }

    pub(crate) fn failed(original: &str, failure: ErrorType) -> Self {
        Self {
            url: original.to_string(),
            failure: Some(failure),
        }
    }

    /// True when no network failure occurred.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Result of expanding one URL, as returned by the API.
///
/// `expanded` is never empty: when expansion fails it carries `original`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expansion {
    pub original: String,
    pub expanded: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Expansion {
    /// A successful expansion.
    pub fn succeeded(original: impl Into<String>, expanded: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            expanded: expanded.into(),
            success: true,
            error: None,
        }
    }

    /// A failed expansion; `expanded` falls back to `original`.
    pub fn failed(original: impl Into<String>, error: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            expanded: original.clone(),
            original,
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Ordered batch of expansions with derived counts.
///
/// Invariant: `succeeded + failed == total == results.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub results: Vec<Expansion>,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl From<Vec<Expansion>> for BatchReport {
    fn from(results: Vec<Expansion>) -> Self {
        let total = results.len();
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            results,
            total,
            succeeded,
            failed: total - succeeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_expansion_falls_back_to_original() {
        let expansion = Expansion::failed("t.co/abc", "connection failed");
        assert_eq!(expansion.expanded, "t.co/abc");
        assert!(!expansion.success);
        assert_eq!(expansion.error.as_deref(), Some("connection failed"));
    }

    #[test]
    fn test_expansion_serialization_omits_missing_error() {
        let json = serde_json::to_value(Expansion::succeeded(
            "https://t.co/abc",
            "https://example.com/",
        ))
        .expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "original": "https://t.co/abc",
                "expanded": "https://example.com/",
                "success": true
            })
        );
    }

    #[test]
    fn test_batch_report_counts() {
        let report = BatchReport::from(vec![
            Expansion::succeeded("a", "https://a/"),
            Expansion::failed("b", "request timed out"),
            Expansion::succeeded("c", "https://c/"),
        ]);
        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.succeeded + report.failed, report.total);
        let originals: Vec<&str> = report.results.iter().map(|r| r.original.as_str()).collect();
        assert_eq!(originals, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_batch_report_empty() {
        let report = BatchReport::from(Vec::new());
        assert_eq!((report.total, report.succeeded, report.failed), (0, 0, 0));
    }

    #[test]
    fn test_resolve_outcome_constructors() {
        let ok = ResolveOutcome::resolved("https://example.com/");
        assert!(ok.is_success());

        let failed = ResolveOutcome::failed("t.co/x", ErrorType::HttpRequestTimeoutError);
        assert!(!failed.is_success());
        assert_eq!(failed.url, "t.co/x");
    }
}
