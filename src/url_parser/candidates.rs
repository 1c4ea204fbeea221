use std::collections::HashSet;
use tracing::trace;

use crate::error::ParseError;

/// Expands a domain into the hostnames likely to serve its public website
///
/// The input itself comes first, followed by each parent domain obtained by
/// stripping the leftmost label, stopping at the second-level domain. The
/// `www.` variant of the most general domain reached is appended last.
/// Duplicates are dropped; first-seen order is kept.
///
/// # Examples
/// * `google.com` -> `[google.com, www.google.com]`
/// * `email.google.com` -> `[email.google.com, google.com, www.google.com]`
pub fn options_for_domain(domain: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut options = Vec::new();

    seen.insert(domain);
    options.push(domain.to_owned());

    // Strip leading labels down to the registrable-looking remainder
    let mut current = domain;
    while current.matches('.').count() > 1 {
        if let Some(idx) = current.find('.') {
            current = &current[idx + 1..];
            if seen.insert(current) {
                options.push(current.to_owned());
            }
        }
    }

    let alt = format!("www.{}", current);
    if !seen.contains(alt.as_str()) {
        options.push(alt);
    }

    trace!("Candidates for {}: {:?}", domain, options);
    options
}

/// Cleans up a user-supplied domain before it is expanded
///
/// Surrounding whitespace and a single trailing dot are removed and the
/// result is lowercased. Anything that looks like a URL or path is rejected.
pub fn normalize_domain(input: &str) -> Result<String, ParseError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if trimmed.is_empty()
        || trimmed.starts_with('.')
        || trimmed
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == ':')
    {
        return Err(ParseError::InvalidDomain(input.to_owned()));
    }

    Ok(trimmed.to_ascii_lowercase())
}
