//! URL expansion.
//!
//! This module turns short or redirecting URLs into their final destinations:
//! - [`resolver`]: one redirect-following GET, failures absorbed
//! - [`fallback`]: extra attempts for shortener URLs that did not move
//! - [`batch`]: bounded concurrent expansion of many URLs
//!
//! [`Expander`] bundles the shared clients and settings and is what the HTTP
//! handlers hold.

mod batch;
mod context;
mod fallback;
mod overrides;
mod request;
mod resolver;
mod types;

pub use batch::expand_batch;
pub use context::{ExpansionContext, ResolverSettings};
pub use fallback::resolve_with_fallback;
pub use overrides::{OverrideEntry, OverrideTable};
pub use resolver::resolve;
pub use types::{BatchReport, Expansion, ResolveOutcome};

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Which resolution steps an expansion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Primary redirect-following request only
    Direct,
    /// Primary request, then the fallback chain for unchanged shortener URLs
    WithFallback,
}

/// Resolves `url` using the steps selected by `strategy`.
pub async fn resolve_with_strategy(
    ctx: &ExpansionContext,
    url: &str,
    strategy: Strategy,
) -> ResolveOutcome {
    match strategy {
        Strategy::Direct => resolve(ctx, url).await,
        Strategy::WithFallback => resolve_with_fallback(ctx, url).await,
    }
}

/// Shared, immutable expansion service.
#[derive(Clone)]
pub struct Expander {
    ctx: ExpansionContext,
}

impl Expander {
    /// Wraps an existing context.
    pub fn new(ctx: ExpansionContext) -> Self {
        Self { ctx }
    }

    /// Builds clients and loads overrides as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if a client cannot be built or the
    /// overrides file cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(ExpansionContext::from_config(config)?))
    }

    pub fn context(&self) -> &ExpansionContext {
        &self.ctx
    }

    /// Returns the expanded form of `url`, or `url` itself if it could not be expanded.
    pub async fn expanded_url(&self, url: &str, strategy: Strategy) -> String {
        resolve_with_strategy(&self.ctx, url, strategy).await.url
    }

    /// Expands a single URL for the single-URL endpoints.
    ///
    /// Network failures are absorbed: the result always reports success and
    /// falls back to the input URL.
    pub async fn expand(&self, url: &str, strategy: Strategy) -> Expansion {
        let expanded = self.expanded_url(url, strategy).await;
        Expansion::succeeded(url, expanded)
    }

    /// Expands many URLs concurrently; see [`expand_batch`].
    pub async fn expand_batch(&self, urls: Vec<String>, strategy: Strategy) -> BatchReport {
        expand_batch(&self.ctx, urls, strategy).await
    }
}
