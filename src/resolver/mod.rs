//! Entry points for identifying a website by URL or by domain.

mod mock;
mod standard;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::IdentifyError;
use crate::model::Info;

pub use mock::MockResolver;
pub use standard::StandardResolver;

/// Resolves details about websites
///
/// Implementations hold no per-call state, so a single instance can be
/// shared (for example behind an `Arc`) by every caller of an application.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Attempt to infer details about a website from its domain name
    async fn identify_domain(&self, domain: &str, cancel: &CancellationToken) -> Result<Info, IdentifyError>;

    /// Attempt to infer details about the website a URL belongs to
    async fn identify_website(&self, link: &str, cancel: &CancellationToken) -> Result<Info, IdentifyError>;
}
