use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::fetcher::FetcherConfig;
use crate::url_parser::url_validator::{ALLOWED_SCHEMES, MAX_URL_LENGTH};

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "IDENTIFY";

/// Configuration for a [`StandardResolver`](crate::resolver::StandardResolver)
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Longest URL accepted by `identify_website`
    pub max_url_length: usize,

    /// Schemes a URL may use
    pub allowed_schemes: Vec<String>,

    /// HTTP client settings
    pub fetcher: FetcherConfig,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum allowed URL length
    pub fn with_max_url_length(mut self, max_url_length: usize) -> Self {
        self.max_url_length = max_url_length;
        self
    }

    /// Sets the allowed URL schemes
    pub fn with_allowed_schemes(mut self, schemes: Vec<String>) -> Self {
        self.allowed_schemes = schemes;
        self
    }

    /// Sets the HTTP client settings
    pub fn with_fetcher(mut self, fetcher: FetcherConfig) -> Self {
        self.fetcher = fetcher;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_url_length: MAX_URL_LENGTH,
            allowed_schemes: ALLOWED_SCHEMES.iter().map(|s| s.to_string()).collect(),
            fetcher: FetcherConfig::default(),
        }
    }
}

/// Flat, file and environment friendly form of [`ResolverConfig`]
///
/// Durations are whole seconds. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub pool_idle_timeout_secs: u64,
    pub pool_max_idle_per_host: usize,
    pub max_redirects: usize,
    pub max_url_length: usize,
    pub allowed_schemes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let config = ResolverConfig::default();
        Self {
            user_agent: config.fetcher.user_agent,
            request_timeout_secs: config.fetcher.request_timeout.as_secs(),
            connect_timeout_secs: config.fetcher.connect_timeout.as_secs(),
            pool_idle_timeout_secs: config.fetcher.pool_idle_timeout.as_secs(),
            pool_max_idle_per_host: config.fetcher.pool_max_idle_per_host,
            max_redirects: config.fetcher.max_redirects,
            max_url_length: config.max_url_length,
            allowed_schemes: config.allowed_schemes,
        }
    }
}

impl From<Settings> for ResolverConfig {
    fn from(s: Settings) -> Self {
        let fetcher = FetcherConfig::new()
            .with_user_agent(s.user_agent)
            .with_request_timeout(Duration::from_secs(s.request_timeout_secs))
            .with_connect_timeout(Duration::from_secs(s.connect_timeout_secs))
            .with_pool_idle_timeout(Duration::from_secs(s.pool_idle_timeout_secs))
            .with_pool_max_idle_per_host(s.pool_max_idle_per_host)
            .with_max_redirects(s.max_redirects);

        ResolverConfig::new()
            .with_max_url_length(s.max_url_length)
            .with_allowed_schemes(s.allowed_schemes)
            .with_fetcher(fetcher)
    }
}

/// Loads configuration from an optional file plus `IDENTIFY_*` variables
///
/// The file format follows its extension (TOML, JSON, YAML, ...).
/// Environment variables win over the file, e.g.
/// `IDENTIFY_REQUEST_TIMEOUT_SECS=5`.
pub fn load(path: Option<&Path>) -> Result<ResolverConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        debug!("Loading configuration from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }
    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let settings: Settings = builder
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    Ok(settings.into())
}
