//! Shared resources for expansion.
//!
//! Built once at startup and shared read-only across requests.

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::expand::overrides::OverrideTable;
use crate::initialization::{init_client, init_redirect_client};

/// Immutable settings consulted by the resolver and the fallback chain.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Desktop identity for the primary request and the Location probe
    pub user_agent: String,
    /// Identity used by the mobile retry
    pub mobile_user_agent: String,
    /// Hosts whose unchanged URLs trigger the fallback chain
    pub shortener_hosts: Vec<String>,
    /// Pinned answers applied as the last fallback step
    pub overrides: OverrideTable,
    /// Maximum URLs resolved concurrently within a batch
    pub batch_concurrency: usize,
}

impl ResolverSettings {
    /// Builds settings from the configuration and an already-loaded override table.
    pub fn new(config: &Config, overrides: OverrideTable) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            mobile_user_agent: config.mobile_user_agent.clone(),
            shortener_hosts: config.shortener_hosts.clone(),
            overrides,
            batch_concurrency: config.batch_concurrency,
        }
    }
}

/// HTTP clients plus settings, everything one expansion needs.
#[derive(Clone)]
pub struct ExpansionContext {
    /// HTTP client that follows redirects
    pub client: Arc<reqwest::Client>,
    /// HTTP client with redirects disabled, used for the Location probe
    pub redirect_client: Arc<reqwest::Client>,
    /// Identities, shortener hosts, overrides and batch limit
    pub settings: Arc<ResolverSettings>,
}

impl ExpansionContext {
    /// Creates a new `ExpansionContext` with the given resources.
    pub fn new(
        client: Arc<reqwest::Client>,
        redirect_client: Arc<reqwest::Client>,
        settings: ResolverSettings,
    ) -> Self {
        Self {
            client,
            redirect_client,
            settings: Arc::new(settings),
        }
    }

    /// Builds clients and loads the override table described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if a client cannot be built or the
    /// overrides file cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let overrides = match &config.overrides {
            Some(path) => OverrideTable::load(path)?,
            None => OverrideTable::default(),
        };
        let client = init_client(config)?;
        let redirect_client = init_redirect_client(config)?;
        Ok(Self::new(
            client,
            redirect_client,
            ResolverSettings::new(config, overrides),
        ))
    }
}
