use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::Resolver;
use crate::error::IdentifyError;
use crate::model::Info;

/// A resolver that always produces what it was given
///
/// Useful in tests of code that depends on a [`Resolver`] without touching
/// the network.
#[derive(Debug, Clone, Default)]
pub struct MockResolver {
    info: Info,
    error: Option<IdentifyError>,
}

impl MockResolver {
    /// Always succeeds with `info`
    pub fn with_info(info: Info) -> Self {
        Self { info, error: None }
    }

    /// Always fails with `error`
    pub fn with_error(error: IdentifyError) -> Self {
        Self {
            info: Info::default(),
            error: Some(error),
        }
    }

    fn answer(&self) -> Result<Info, IdentifyError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.info.clone()),
        }
    }
}

#[async_trait]
impl Resolver for MockResolver {
    async fn identify_domain(&self, _domain: &str, _cancel: &CancellationToken) -> Result<Info, IdentifyError> {
        self.answer()
    }

    async fn identify_website(&self, _link: &str, _cancel: &CancellationToken) -> Result<Info, IdentifyError> {
        self.answer()
    }
}
