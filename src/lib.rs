//! Infer who runs a website, where its homepage lives and what it is about.
//!
//! Given a URL, the site root is fetched and its linked data and meta tags
//! are combined under a fixed priority order. Given a bare domain, a ranked
//! list of candidate hostnames is tried until one of them resolves.
//!
//! ```no_run
//! use site_identify::{Resolver, StandardResolver};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let resolver = StandardResolver::new()?;
//! let info = resolver.identify_domain("email.example.com", &CancellationToken::new()).await?;
//! println!("{}", info);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod model;
pub mod resolver;
pub mod url_parser;
pub mod utils;

pub use crate::config::ResolverConfig;
pub use error::{Attempt, FetchError, IdentifyError, ParseError, ResolveError};
pub use extract::FieldResolver;
pub use fetcher::{DocumentFetcher, FetchedPage, FetcherConfig, HttpFetcher};
pub use model::Info;
pub use resolver::{MockResolver, Resolver, StandardResolver};
