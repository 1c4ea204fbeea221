use tracing::debug;
use url::Url;

use crate::error::ParseError;

/// Reduces a URL to the root of its site
///
/// Path, query and fragment are all cleared so the result is scheme, host
/// and port only. Applying it to a root URL returns the same root.
pub fn root_url(link: &str) -> Result<String, ParseError> {
    parse_root(link).map(String::from)
}

/// Same as [`root_url`] but keeps the parsed form
pub fn parse_root(link: &str) -> Result<Url, ParseError> {
    let mut url = Url::parse(link).map_err(|source| ParseError::InvalidUrl {
        input: link.to_owned(),
        source,
    })?;

    url.set_path("");
    url.set_query(None);
    url.set_fragment(None);

    debug!("Root of {} is {}", link, url);
    Ok(url)
}
