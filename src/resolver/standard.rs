use async_trait::async_trait;
use scraper::Html;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use super::Resolver;
use crate::config::ResolverConfig;
use crate::error::{Attempt, FetchError, IdentifyError, ResolveError};
use crate::extract::FieldResolver;
use crate::fetcher::{DocumentFetcher, HttpFetcher};
use crate::model::Info;
use crate::url_parser::{normalize_domain, options_for_domain, parse_root, validate_scheme, validate_url};

/// The standard resolver: fetch the site root and read its metadata
///
/// Construct one at startup and pass it to whatever needs it; it is
/// read-only after construction.
#[derive(Debug, Clone)]
pub struct StandardResolver<F = HttpFetcher> {
    fetcher: F,
    fields: FieldResolver,
    max_url_length: usize,
    allowed_schemes: Vec<String>,
}

impl StandardResolver<HttpFetcher> {
    /// Creates a resolver backed by an HTTP fetcher with default settings
    pub fn new() -> Result<Self, FetchError> {
        Self::from_config(&ResolverConfig::default())
    }

    /// Creates a resolver backed by an HTTP fetcher built from `config`
    pub fn from_config(config: &ResolverConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::with_config(&config.fetcher)?;
        Ok(Self::with_fetcher_and_config(fetcher, config))
    }
}

impl<F: DocumentFetcher> StandardResolver<F> {
    /// Creates a resolver around any document fetcher
    pub fn with_fetcher(fetcher: F) -> Self {
        Self::with_fetcher_and_config(fetcher, &ResolverConfig::default())
    }

    pub fn with_fetcher_and_config(fetcher: F, config: &ResolverConfig) -> Self {
        Self {
            fetcher,
            fields: FieldResolver::default(),
            max_url_length: config.max_url_length,
            allowed_schemes: config.allowed_schemes.clone(),
        }
    }

    /// Replaces the field resolution rules
    pub fn with_field_resolver(mut self, fields: FieldResolver) -> Self {
        self.fields = fields;
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Reduces a link to the root URL that will be fetched
    fn normalize(&self, link: &str) -> Result<String, IdentifyError> {
        validate_url(link, self.max_url_length)?;
        let root = parse_root(link)?;
        validate_scheme(&root, &self.allowed_schemes)?;
        Ok(root.into())
    }

    // Kept out of the async path; the parsed document is not Send
    fn extract(&self, body: &[u8], root: &str) -> Info {
        let html = String::from_utf8_lossy(body);
        let document = Html::parse_document(&html);
        self.fields.resolve(&document, root)
    }
}

#[async_trait]
impl<F: DocumentFetcher> Resolver for StandardResolver<F> {
    #[instrument(level = "debug", skip_all, fields(domain = %domain))]
    async fn identify_domain(&self, domain: &str, cancel: &CancellationToken) -> Result<Info, IdentifyError> {
        let normalized = normalize_domain(domain)?;
        let candidates = options_for_domain(&normalized);
        debug!("Trying {} candidates for {}", candidates.len(), normalized);

        // Most specific first; stop at the first candidate that resolves
        let mut attempts = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let link = format!("https://{}", candidate);
            match self.identify_website(&link, cancel).await {
                Ok(info) => {
                    info!("Resolved {} via {}", normalized, candidate);
                    return Ok(info);
                }
                Err(e) if e.is_cancelled() => return Err(e),
                Err(e) => {
                    debug!("Candidate {} failed: {}", candidate, e);
                    attempts.push(Attempt { candidate, error: e });
                }
            }
        }

        warn!("Could not resolve {} after {} attempts", normalized, attempts.len());
        Err(ResolveError::new(domain, attempts).into())
    }

    #[instrument(level = "debug", skip_all, fields(link = %link))]
    async fn identify_website(&self, link: &str, cancel: &CancellationToken) -> Result<Info, IdentifyError> {
        let root = self.normalize(link)?;
        debug!("Normalized {} to {}", link, root);

        let page = self
            .fetcher
            .fetch(&root, cancel)
            .await
            .map_err(|source| IdentifyError::Fetch {
                url: root.clone(),
                source,
            })?;
        debug!("Fetched {} bytes from {}", page.body.len(), page.url);

        Ok(self.extract(&page.body, &root))
    }
}
