use scraper::Html;
use serde::Deserialize;

use super::meta_tags::first_element;
use crate::error::ExtractionError;
use crate::model::Info;

const LINKED_DATA_TYPE: &str = "application/ld+json";

/// The subset of a JSON-LD organization record we care about
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LinkedData {
    name: Option<String>,
    #[serde(rename = "legalName")]
    legal_name: Option<String>,
    description: Option<String>,
}

impl LinkedData {
    /// Decodes the text content of a linked data script
    pub(crate) fn parse(text: &str) -> Result<Self, ExtractionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractionError::Empty);
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Copies non-empty values into `info`; the name wins over the legal name
    pub(crate) fn apply(&self, info: &mut Info) {
        if let Some(owner) = non_empty(&self.name).or_else(|| non_empty(&self.legal_name)) {
            info.owner = owner.to_owned();
        }
        if let Some(description) = non_empty(&self.description) {
            info.description = description.to_owned();
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Finds and decodes the first linked data script of a document
///
/// Returns `None` when the document carries no such script.
pub(crate) fn extract(document: &Html) -> Option<Result<LinkedData, ExtractionError>> {
    let script = first_element(document, |el| {
        el.name() == "script" && el.attr("type") == Some(LINKED_DATA_TYPE)
    })?;
    let text: String = script.text().collect();
    Some(LinkedData::parse(&text))
}
