use scraper::node::Element;
use scraper::{ElementRef, Html};
use url::Url;

use crate::model::Info;

/// A field of [`Info`] that a rule can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Owner,
    Homepage,
    Description,
}

impl Field {
    pub(crate) fn slot(self, info: &mut Info) -> &mut String {
        match self {
            Field::Owner => &mut info.owner,
            Field::Homepage => &mut info.homepage,
            Field::Description => &mut info.description,
        }
    }
}

/// One head-element source for a field
///
/// A rule matches an element by tag name and the value of one identifying
/// attribute, then reads another attribute as the field value. Rules are
/// matched against the whole document, not just `<head>`, so tags that
/// slipped out of the head in broken markup are still found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaRule {
    pub field: Field,
    tag: &'static str,
    key: &'static str,
    value: String,
    ignore_case: bool,
    attr: &'static str,
}

impl MetaRule {
    /// `<link rel="..." href="...">`
    pub fn link_rel(field: Field, rel: impl Into<String>) -> Self {
        Self {
            field,
            tag: "link",
            key: "rel",
            value: rel.into(),
            ignore_case: false,
            attr: "href",
        }
    }

    /// `<meta property="..." content="...">`, as used by OpenGraph
    pub fn meta_property(field: Field, property: impl Into<String>) -> Self {
        Self {
            field,
            tag: "meta",
            key: "property",
            value: property.into(),
            ignore_case: false,
            attr: "content",
        }
    }

    /// `<meta name="..." content="...">`; the name compares case-insensitively
    pub fn meta_name(field: Field, name: impl Into<String>) -> Self {
        Self {
            field,
            tag: "meta",
            key: "name",
            value: name.into(),
            ignore_case: true,
            attr: "content",
        }
    }

    fn matches(&self, el: &Element) -> bool {
        if el.name() != self.tag {
            return false;
        }
        match el.attr(self.key) {
            Some(v) if self.ignore_case => v.eq_ignore_ascii_case(&self.value),
            Some(v) => v == self.value,
            None => false,
        }
    }

    /// First element of the document this rule recognises
    pub(crate) fn first_match<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        first_element(document, |el| self.matches(el))
    }

    /// Reads the rule's value attribute from a matched element
    ///
    /// A missing attribute yields the page URL for the homepage and an
    /// empty string otherwise. Relative homepage links are resolved
    /// against the page URL.
    pub(crate) fn value_of(&self, el: &ElementRef<'_>, page_url: &str) -> String {
        let raw = el.value().attr(self.attr).map(str::trim);
        match (self.field, raw) {
            (Field::Homepage, Some(href)) => absolutize(href, page_url),
            (Field::Homepage, None) => page_url.to_owned(),
            (_, Some(content)) => content.to_owned(),
            (_, None) => String::new(),
        }
    }
}

/// The built-in rule table, highest priority first within each field
pub fn standard_rules() -> Vec<MetaRule> {
    vec![
        MetaRule::link_rel(Field::Homepage, "canonical"),
        MetaRule::meta_property(Field::Homepage, "og:url"),
        MetaRule::meta_property(Field::Owner, "og:site_name"),
        MetaRule::meta_name(Field::Owner, "organization"),
        MetaRule::meta_name(Field::Owner, "author"),
        MetaRule::meta_name(Field::Description, "description"),
        MetaRule::meta_property(Field::Description, "og:description"),
    ]
}

pub(crate) fn first_element<'a, P>(document: &'a Html, predicate: P) -> Option<ElementRef<'a>>
where
    P: Fn(&Element) -> bool,
{
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| predicate(el.value()))
}

fn absolutize(href: &str, page_url: &str) -> String {
    match Url::parse(href) {
        Ok(url) => url.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(page_url)
            .and_then(|base| base.join(href))
            .map(String::from)
            .unwrap_or_else(|_| href.to_owned()),
        Err(_) => href.to_owned(),
    }
}
