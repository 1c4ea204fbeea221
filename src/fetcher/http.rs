use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use super::config::FetcherConfig;
use super::{DocumentFetcher, FetchedPage};
use crate::error::FetchError;

/// Fetches documents over HTTP(S) with a pooled reqwest client
///
/// Cloning is cheap and shares the underlying connection pool, so one
/// instance can serve any number of concurrent resolutions.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with the default configuration
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(&FetcherConfig::default())
    }

    /// Creates a fetcher from custom configuration
    pub fn with_config(config: &FetcherConfig) -> Result<Self, FetchError> {
        debug!(
            "Initializing HTTP client: user_agent={}, timeout={:?}, max_redirects={}",
            config.user_agent, config.request_timeout, config.max_redirects
        );

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                FetchError::from(e)
            })?;

        Ok(Self { client })
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn get(&self, url: &str) -> Result<FetchedPage, FetchError> {
        debug!("Sending request to {}", url);
        let resp = self.client.get(url).send().await.map_err(|e| {
            warn!("Failed to send request to {}: {}", url, e);
            FetchError::from(e)
        })?;

        let status = resp.status();
        let final_url = resp.url().to_string();
        debug!("Response status: {} (final url {})", status, final_url);
        trace!("Response headers: {:?}", resp.headers());

        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        if body.is_empty() {
            warn!("Empty body returned from {}", final_url);
            return Err(FetchError::EmptyBody);
        }

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<FetchedPage, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("Fetch of {} cancelled", url);
                Err(FetchError::Cancelled)
            }
            result = self.get(url) => result,
        }
    }
}
