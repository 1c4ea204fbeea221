use std::sync::Arc;
use thiserror::Error;

/// Input that could not be interpreted as a URL or domain
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("URL exceeds maximum length of {max} characters")]
    UrlTooLong { max: usize },

    #[error("failed to parse URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL scheme '{scheme}' is not allowed")]
    UnsupportedScheme { scheme: String },

    #[error("invalid domain {0:?}")]
    InvalidDomain(String),
}

/// Failure to retrieve a document
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("could not fetch website: {0}")]
    Transport(#[source] Arc<reqwest::Error>),

    #[error("unexpected response status: {0}")]
    Status(u16),

    #[error("no content returned")]
    EmptyBody,

    #[error("request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(Arc::new(err))
    }
}

/// One failed candidate of a domain resolution
#[derive(Debug, Clone)]
pub struct Attempt {
    pub candidate: String,
    pub error: IdentifyError,
}

/// Every candidate for a domain failed
///
/// The message is fixed; the per-candidate causes are kept in the order
/// they were attempted.
#[derive(Debug, Clone, Error)]
#[error("could not resolve identity for domain")]
pub struct ResolveError {
    domain: String,
    attempts: Vec<Attempt>,
}

impl ResolveError {
    pub(crate) fn new(domain: impl Into<String>, attempts: Vec<Attempt>) -> Self {
        Self {
            domain: domain.into(),
            attempts,
        }
    }

    /// The domain as it was handed to the resolver
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Failed attempts, in the order they were tried
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn errors(&self) -> impl Iterator<Item = &IdentifyError> {
        self.attempts.iter().map(|a| &a.error)
    }
}

/// Error returned by the identification entry points
#[derive(Debug, Clone, Error)]
pub enum IdentifyError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Unresolved(#[from] ResolveError),
}

impl IdentifyError {
    /// True when the attempt was abandoned because the caller cancelled it
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            IdentifyError::Fetch {
                source: FetchError::Cancelled,
                ..
            }
        )
    }
}

/// Linked data that could not be used; never leaves the extractor
#[derive(Debug, Error)]
pub(crate) enum ExtractionError {
    #[error("linked data script is empty")]
    Empty,

    #[error("could not decode linked data: {0}")]
    Json(#[from] serde_json::Error),
}
