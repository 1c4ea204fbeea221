use tracing::warn;
use url::Url;

use crate::error::ParseError;

// Default limits, overridable through ResolverConfig
pub const MAX_URL_LENGTH: usize = 2048;
pub const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Validates basic URL requirements before any parsing happens
pub fn validate_url(url: &str, max_url_length: usize) -> Result<(), ParseError> {
    if url.trim().is_empty() {
        warn!("Received empty URL");
        return Err(ParseError::EmptyUrl);
    }

    if url.len() > max_url_length {
        warn!("URL exceeds maximum length: {} > {}", url.len(), max_url_length);
        return Err(ParseError::UrlTooLong {
            max: max_url_length,
        });
    }

    Ok(())
}

/// Rejects URLs whose scheme is not in the allowed list
pub fn validate_scheme(url: &Url, allowed_schemes: &[String]) -> Result<(), ParseError> {
    if allowed_schemes.iter().any(|s| s == url.scheme()) {
        return Ok(());
    }

    warn!("Disallowed URL scheme: {}", url.scheme());
    Err(ParseError::UnsupportedScheme {
        scheme: url.scheme().to_owned(),
    })
}
