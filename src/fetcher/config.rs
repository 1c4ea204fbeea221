use std::time::Duration;

// Constants for fetcher configuration
const REQUEST_TIMEOUT: u64 = 30; // seconds
const CONNECT_TIMEOUT: u64 = 10; // seconds
const POOL_IDLE_TIMEOUT: u64 = 90; // seconds
const POOL_MAX_IDLE_PER_HOST: usize = 10;
const MAX_REDIRECTS: usize = 10;

/// Configuration for the HTTP document fetcher
///
/// Controls the client identity, timeouts, connection pooling and how many
/// redirects are followed before the fetch is treated as a transport error.
#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    pub user_agent: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub max_redirects: usize,
}

impl FetcherConfig {
    /// Creates a new fetcher configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user agent string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the overall request timeout, body included
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the connection timeout for establishing new connections
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the idle timeout for connection pool
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Sets the maximum number of idle connections per host
    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Sets the maximum number of redirects to follow
    pub fn with_max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("site_identify/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT),
            pool_idle_timeout: Duration::from_secs(POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: POOL_MAX_IDLE_PER_HOST,
            max_redirects: MAX_REDIRECTS,
        }
    }
}
