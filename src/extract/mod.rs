//! Field resolution from a parsed document.
//!
//! Linked data is consulted first since it is the strongest signal when a
//! site provides it. The meta-tag rule table then fills whatever is still
//! empty, and the homepage finally falls back to the page URL itself.

mod linked_data;
mod meta_tags;

#[cfg(test)]
mod tests;

use scraper::Html;
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::model::Info;

pub use meta_tags::{standard_rules, Field, MetaRule};

/// Combines every metadata source of a page into an [`Info`]
///
/// Once a field has been decided by a source, later sources never touch
/// it. Resolution cannot fail: unusable sources are skipped.
#[derive(Debug, Clone)]
pub struct FieldResolver {
    rules: Vec<MetaRule>,
}

impl Default for FieldResolver {
    fn default() -> Self {
        Self::with_rules(standard_rules())
    }
}

impl FieldResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom rule table, highest priority first within each field
    pub fn with_rules(rules: Vec<MetaRule>) -> Self {
        Self { rules }
    }

    /// Parses raw HTML and resolves it
    pub fn resolve_html(&self, html: &str, page_url: &str) -> Info {
        let document = Html::parse_document(html);
        self.resolve(&document, page_url)
    }

    /// Resolves every field of a parsed document
    ///
    /// # Arguments
    /// * `document` - The parsed page
    /// * `page_url` - Root URL the page was fetched from, used as the homepage fallback
    pub fn resolve(&self, document: &Html, page_url: &str) -> Info {
        let mut info = Info::default();

        // 1. Linked data; failures fall through to the meta tags
        match linked_data::extract(document) {
            Some(Ok(data)) => {
                data.apply(&mut info);
                trace!("Linked data yielded owner={:?}", info.owner);
            }
            Some(Err(e)) => debug!("Could not extract JSON-LD data: {}", e),
            None => trace!("No linked data script found"),
        }

        let mut settled: HashSet<Field> = HashSet::new();
        if !info.owner.is_empty() {
            settled.insert(Field::Owner);
        }
        if !info.description.is_empty() {
            settled.insert(Field::Description);
        }

        // 2. Meta tags; the first rule with a matching element decides the field
        for rule in &self.rules {
            if settled.contains(&rule.field) {
                continue;
            }
            if let Some(el) = rule.first_match(document) {
                *rule.field.slot(&mut info) = rule.value_of(&el, page_url);
                settled.insert(rule.field);
            }
        }

        // 3. The page is its own homepage
        if !settled.contains(&Field::Homepage) {
            info.homepage = page_url.to_owned();
        }

        debug!("Resolved {}: {:?}", page_url, info);
        info
    }
}
