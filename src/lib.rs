//! link_expander library: expands shortened URLs over HTTP
//!
//! This library provides an HTTP API that takes short or redirecting URLs
//! (typically link-shortener URLs) and reports where they finally land after
//! following redirects. Shortener URLs that do not move on the first attempt
//! go through a fallback chain (Location probe, mobile identity retry,
//! manual overrides).
//!
//! # Example
//!
//! ```no_run
//! use link_expander::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 8080,
//!     ..Default::default()
//! };
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Expansion can also be used without the server:
//!
//! ```no_run
//! use link_expander::{Config, Expander, Strategy};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let expander = Expander::from_config(&Config::default())?;
//! let expansion = expander.expand("t.co/abc123", Strategy::WithFallback).await;
//! println!("{} -> {}", expansion.original, expansion.expanded);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod config;
pub mod error_handling;
pub mod expand;
pub mod initialization;
pub mod server;

// Re-export public API
pub use app::{is_shortener_url, normalize_url};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ApiError, ErrorType, InitializationError};
pub use expand::{
    BatchReport, Expander, Expansion, OverrideEntry, OverrideTable, ResolveOutcome, Strategy,
};
pub use server::{build_router, serve};

use anyhow::{Context, Result};

/// Builds the expander described by `config`, binds the listener, and serves
/// until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the HTTP clients cannot be built, the overrides file
/// cannot be loaded, or the listen address cannot be bound.
pub async fn run_server(config: Config) -> Result<()> {
    let expander = Expander::from_config(&config).context("Failed to initialize expander")?;

    log::info!(
        "Shortener hosts: {}; batch concurrency: {}; timeout: {}s; max redirects: {}",
        config.shortener_hosts.join(", "),
        config.batch_concurrency,
        config.timeout_seconds,
        config.max_redirects
    );

    let address = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| InitializationError::BindError {
            address: address.clone(),
            source,
        })?;

    serve(listener, expander).await
}
