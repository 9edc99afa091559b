//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BATCH_CONCURRENCY, DEFAULT_BIND_ADDRESS, DEFAULT_MOBILE_USER_AGENT, DEFAULT_PORT,
    DEFAULT_SHORTENER_HOSTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line (with environment variable fallbacks) by the
/// binary, or constructed programmatically by library users and tests.
///
/// # Examples
///
/// ```no_run
/// use link_expander::Config;
///
/// let config = Config {
///     port: 8080,
///     shortener_hosts: vec!["t.co".to_string(), "bit.ly".to_string()],
///     ..Default::default()
/// };
/// ```
///
/// ```bash
/// # Listen on a custom port and treat bit.ly as a shortener too
/// link_expander --port 8080 --shortener-hosts t.co,bit.ly
///
/// # Load manual overrides
/// link_expander --overrides ./overrides.toml
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "link_expander",
    version,
    about = "Expands shortened URLs by following their redirects."
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "LINK_EXPANDER_BIND", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds for outbound calls
    #[arg(long, env = "LINK_EXPANDER_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum number of redirect hops to follow
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// User-Agent sent on the primary resolution request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// User-Agent sent by the mobile fallback retry
    #[arg(long, default_value = DEFAULT_MOBILE_USER_AGENT)]
    pub mobile_user_agent: String,

    /// Hosts treated as link shorteners (comma-separated).
    ///
    /// Only URLs on these hosts (or their subdomains) go through the fallback
    /// chain when the primary resolution leaves them unchanged.
    #[arg(
        long,
        env = "LINK_EXPANDER_SHORTENERS",
        value_delimiter = ',',
        default_value = "t.co"
    )]
    pub shortener_hosts: Vec<String>,

    /// Maximum number of URLs resolved concurrently within one batch
    #[arg(long, default_value_t = DEFAULT_BATCH_CONCURRENCY)]
    pub batch_concurrency: usize,

    /// TOML file with manual expansion overrides
    #[arg(long, env = "LINK_EXPANDER_OVERRIDES")]
    pub overrides: Option<PathBuf>,
}

impl Config {
    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// The `host:port` string the server binds to.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_redirects: MAX_REDIRECT_HOPS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            mobile_user_agent: DEFAULT_MOBILE_USER_AGENT.to_string(),
            shortener_hosts: DEFAULT_SHORTENER_HOSTS
                .iter()
                .map(|host| host.to_string())
                .collect(),
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
            overrides: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        // Parsing with no arguments must agree with Default, otherwise library
        // users and the binary would behave differently.
        let parsed = Config::try_parse_from(["link_expander"]).expect("defaults should parse");
        let default = Config::default();

        assert_eq!(parsed.bind, default.bind);
        assert_eq!(parsed.timeout_seconds, default.timeout_seconds);
        assert_eq!(parsed.max_redirects, default.max_redirects);
        assert_eq!(parsed.user_agent, default.user_agent);
        assert_eq!(parsed.mobile_user_agent, default.mobile_user_agent);
        assert_eq!(parsed.shortener_hosts, default.shortener_hosts);
        assert_eq!(parsed.batch_concurrency, default.batch_concurrency);
        assert!(parsed.overrides.is_none());
    }

    #[test]
    fn test_shortener_hosts_comma_separated() {
        let parsed = Config::try_parse_from([
            "link_expander",
            "--shortener-hosts",
            "t.co,bit.ly,tinyurl.com",
        ])
        .expect("should parse");
        assert_eq!(parsed.shortener_hosts, vec!["t.co", "bit.ly", "tinyurl.com"]);
    }

    #[test]
    fn test_timeout_and_listen_address() {
        let config = Config {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            timeout_seconds: 3,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.listen_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = Config::try_parse_from(["link_expander", "--log-level", "loud"]);
        assert!(result.is_err());
    }
}
