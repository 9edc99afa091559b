//! Manual expansion overrides.
//!
//! Some short links cannot be expanded over the network at all (the shortener
//! blocks the server, or the target is gone). Operators can pin an answer for
//! them in a TOML file:
//!
//! ```toml
//! [[override]]
//! match = "uQwbMzcf37"
//! destination = "https://example.com/landing"
//! ```
//!
//! An entry applies when its `match` string occurs anywhere in the input URL,
//! and only after every network step has left the URL unchanged.

use std::path::Path;

use serde::Deserialize;

use crate::error_handling::InitializationError;

/// One pinned expansion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverrideEntry {
    /// Substring looked for in the input URL
    #[serde(rename = "match")]
    pub pattern: String,
    /// URL returned when the pattern matches
    pub destination: String,
}

#[derive(Debug, Default, Deserialize)]
struct OverridesFile {
    #[serde(default, rename = "override")]
    entries: Vec<OverrideEntry>,
}

/// Ordered table of manual overrides. The first matching entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: Vec<OverrideEntry>,
}

impl OverrideTable {
    /// Builds a table from entries, dropping any with an empty pattern.
    pub fn new(entries: Vec<OverrideEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|entry| {
                if entry.pattern.is_empty() {
                    log::warn!(
                        "Ignoring override with empty match for {}",
                        entry.destination
                    );
                    false
                } else {
                    true
                }
            })
            .collect();
        Self { entries }
    }

    /// Parses a table from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let file: OverridesFile = toml::from_str(text)?;
        Ok(Self::new(file.entries))
    }

    /// Loads a table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::OverridesReadError` if the file cannot be
    /// read and `InitializationError::OverridesParseError` if it is not a
    /// valid overrides document.
    pub fn load(path: &Path) -> Result<Self, InitializationError> {
        let text =
            std::fs::read_to_string(path).map_err(|source| InitializationError::OverridesReadError {
                path: path.to_path_buf(),
                source,
            })?;
        let table = Self::from_toml_str(&text).map_err(|source| {
            InitializationError::OverridesParseError {
                path: path.to_path_buf(),
                source,
            }
        })?;
        log::info!(
            "Loaded {} expansion override(s) from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Destination of the first entry whose pattern occurs in `url`.
    pub fn lookup(&self, url: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| url.contains(entry.pattern.as_str()))
            .map(|entry| entry.destination.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[[override]]
match = "uQwbMzcf37"
destination = "https://example.com/landing"

[[override]]
match = "t.co/"
destination = "https://example.com/catch-all"
"#;

    #[test]
    fn test_parse_and_lookup() {
        let table = OverrideTable::from_toml_str(SAMPLE).expect("valid overrides");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.lookup("https://t.co/uQwbMzcf37"),
            Some("https://example.com/landing")
        );
        assert_eq!(
            table.lookup("https://t.co/other"),
            Some("https://example.com/catch-all")
        );
        assert_eq!(table.lookup("https://bit.ly/other"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let table = OverrideTable::new(vec![
            OverrideEntry {
                pattern: "abc".to_string(),
                destination: "https://first.example/".to_string(),
            },
            OverrideEntry {
                pattern: "abc".to_string(),
                destination: "https://second.example/".to_string(),
            },
        ]);
        assert_eq!(table.lookup("t.co/abc"), Some("https://first.example/"));
    }

    #[test]
    fn test_empty_document_is_empty_table() {
        let table = OverrideTable::from_toml_str("").expect("empty document is valid");
        assert!(table.is_empty());
        assert_eq!(table.lookup("https://t.co/abc"), None);
    }

    #[test]
    fn test_empty_pattern_is_dropped() {
        let table = OverrideTable::from_toml_str(
            "[[override]]\nmatch = \"\"\ndestination = \"https://example.com/\"\n",
        )
        .expect("valid toml");
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_destination_is_parse_error() {
        let result = OverrideTable::from_toml_str("[[override]]\nmatch = \"abc\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write");

        let table = OverrideTable::load(file.path()).expect("load");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.toml");
        let err = OverrideTable::load(&missing).expect_err("missing file must fail");
        assert!(matches!(err, InitializationError::OverridesReadError { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"this is = = not toml").expect("write");
        let err = OverrideTable::load(file.path()).expect_err("invalid toml must fail");
        assert!(matches!(err, InitializationError::OverridesParseError { .. }));
    }
}
