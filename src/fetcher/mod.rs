//! Retrieval of the raw document for a URL.

mod config;
mod http;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::FetchError;

pub use config::FetcherConfig;
pub use http::HttpFetcher;

/// A successfully retrieved document
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,    // Final URL after redirects
    pub status: u16,    // Always 200 for pages handed to the resolver
    pub body: Vec<u8>,  // Raw, non-empty response body
}

/// Issues a GET for a URL and returns the body
///
/// Implementations must give up promptly with [`FetchError::Cancelled`]
/// once `cancel` fires. Any status other than 200, a transport failure and
/// an empty body are each reported as their own [`FetchError`] variant.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<FetchedPage, FetchError>;
}
