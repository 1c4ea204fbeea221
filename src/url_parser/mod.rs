//! Pure helpers that turn user input into the URLs the resolver fetches.

mod candidates;
mod root_url;
pub mod url_validator;

#[cfg(test)]
mod tests;

pub use candidates::{normalize_domain, options_for_domain};
pub use root_url::{parse_root, root_url};
pub use url_validator::{validate_scheme, validate_url};
