//! Document-level types and the query surface.

use super::Media;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata from the `<docdata>` block.
///
/// Keys are stored lower-cased and looked up case-insensitively; unknown
/// keys simply accumulate. `date.*` values are the ISO-8601 strings from the
/// feed, not parsed timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocData {
    #[serde(flatten)]
    entries: HashMap<String, String>,

    /// Keyword list from `<keyword>` elements, in document order. Present
    /// (possibly empty) for every document.
    #[serde(rename = "key-list")]
    key_list: Vec<String>,
}

impl DocData {
    /// Look up a value by key, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The full key/value view, keys lower-cased.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Keywords in document order.
    pub fn key_list(&self) -> &[String] {
        &self.key_list
    }

    pub(crate) fn insert(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_ascii_lowercase(), value);
    }

    pub(crate) fn push_keyword(&mut self, keyword: String) {
        self.key_list.push(keyword);
    }
}

/// Metadata from the `<pubdata>` element's attributes.
///
/// Populated atomically from one element's attribute set; keys are stored
/// lower-cased and looked up case-insensitively.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PubData {
    #[serde(flatten)]
    entries: HashMap<String, String>,
}

impl PubData {
    /// Look up a value by attribute name, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The full key/value view, keys lower-cased.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Whether a `<pubdata>` element was seen at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn replace(&mut self, entries: HashMap<String, String>) {
        self.entries = entries;
    }
}

/// One `<revision-history>` record: the element's attribute set with keys
/// lower-cased. Common keys are `comment`, `function`, `name`, and `norm`;
/// any subset may be absent.
pub type Revision = HashMap<String, String>;

/// Main headline plus sub-headlines, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub(crate) struct Headlines {
    pub(crate) hl1: Option<String>,
    pub(crate) hl2: Vec<String>,
}

/// Byline author and title, accumulated from character data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Byline {
    pub(crate) author: String,
    pub(crate) title: String,
}

/// Which byline field to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BylineField {
    /// The author's name.
    #[default]
    Author,
    /// The author's title, e.g. "Staff Writer".
    Title,
}

/// A parsed NITF document.
///
/// Created empty at parse start, mutated only by the parser, and read-only
/// thereafter. Querying a partially built document mid-parse is unsupported;
/// all accessors are meant to be called after parsing completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NitfDocument {
    #[serde(rename = "docdata")]
    pub(crate) doc_data: DocData,

    #[serde(rename = "pubdata")]
    pub(crate) pub_data: PubData,

    pub(crate) revisions: Vec<Revision>,

    pub(crate) headlines: Headlines,

    pub(crate) byline: Byline,

    pub(crate) location: String,

    pub(crate) distributor: String,

    /// Paragraphs in document order, except a paragraph flagged as lede,
    /// which always sits at position 0.
    pub(crate) content: Vec<String>,

    pub(crate) media: Vec<Media>,

    pub(crate) tagline: String,

    pub(crate) bibliography: String,
}

impl NitfDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata from the `<docdata>` block.
    pub fn doc_data(&self) -> &DocData {
        &self.doc_data
    }

    /// Metadata from the `<pubdata>` element.
    pub fn pub_data(&self) -> &PubData {
        &self.pub_data
    }

    /// Revision records in document order.
    pub fn revision_history(&self) -> &[Revision] {
        &self.revisions
    }

    /// The headline at the given level.
    ///
    /// Level 1 is the main headline; level `n >= 2` is the `(n - 1)`-th
    /// sub-headline in document order. A level with no headline is an
    /// error, not a default.
    pub fn headline(&self, level: usize) -> Result<&str> {
        match level {
            1 => self
                .headlines
                .hl1
                .as_deref()
                .ok_or(Error::HeadlineOutOfRange(1)),
            n if n >= 2 => self
                .headlines
                .hl2
                .get(n - 2)
                .map(String::as_str)
                .ok_or(Error::HeadlineOutOfRange(n)),
            _ => Err(Error::HeadlineOutOfRange(level)),
        }
    }

    /// All sub-headlines in document order.
    pub fn subheadlines(&self) -> &[String] {
        &self.headlines.hl2
    }

    /// Byline author or title, `None` when never populated.
    pub fn byline(&self, field: BylineField) -> Option<&str> {
        match field {
            BylineField::Author => non_empty(&self.byline.author),
            BylineField::Title => non_empty(&self.byline.title),
        }
    }

    /// Media records in document order.
    pub fn media(&self) -> &[Media] {
        &self.media
    }

    /// Collect one named field across all media records, skipping records
    /// where the field is absent.
    pub fn media_values(&self, field: &str) -> Vec<&str> {
        self.media.iter().filter_map(|m| m.get(field)).collect()
    }

    /// The lede (opening) paragraph, `None` for an empty document.
    pub fn lede(&self) -> Option<&str> {
        self.content.first().map(String::as_str)
    }

    /// All paragraphs, lede first.
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// The dateline location, `None` when never populated.
    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    /// The information distributor, `None` when never populated.
    pub fn distributor(&self) -> Option<&str> {
        non_empty(&self.distributor)
    }

    /// The closing tagline, `None` when never populated.
    pub fn tagline(&self) -> Option<&str> {
        non_empty(&self.tagline)
    }

    /// Free-form bibliographic data, `None` when never populated.
    pub fn bibliography(&self) -> Option<&str> {
        non_empty(&self.bibliography)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_data_case_insensitive() {
        let mut doc_data = DocData::default();
        doc_data.insert("DOC-ID", "abc123".to_string());

        assert_eq!(doc_data.get("doc-id"), Some("abc123"));
        assert_eq!(doc_data.get("DOC-ID"), Some("abc123"));
        assert_eq!(doc_data.get("missing"), None);
    }

    #[test]
    fn test_key_list_order() {
        let mut doc_data = DocData::default();
        doc_data.push_keyword("storm".to_string());
        doc_data.push_keyword("coast".to_string());

        assert_eq!(doc_data.key_list(), ["storm", "coast"]);
    }

    #[test]
    fn test_headline_levels() {
        let mut doc = NitfDocument::new();
        doc.headlines.hl1 = Some("Main".to_string());
        doc.headlines.hl2 = vec!["Sub one".to_string(), "Sub two".to_string()];

        assert_eq!(doc.headline(1).unwrap(), "Main");
        assert_eq!(doc.headline(2).unwrap(), "Sub one");
        assert_eq!(doc.headline(3).unwrap(), "Sub two");
        assert!(matches!(doc.headline(4), Err(Error::HeadlineOutOfRange(4))));
        assert!(matches!(doc.headline(0), Err(Error::HeadlineOutOfRange(0))));
    }

    #[test]
    fn test_headline_unset_is_error() {
        let doc = NitfDocument::new();
        assert!(matches!(doc.headline(1), Err(Error::HeadlineOutOfRange(1))));
    }

    #[test]
    fn test_byline_fields() {
        let mut doc = NitfDocument::new();
        doc.byline.author.push_str("Jane Doe");

        assert_eq!(doc.byline(BylineField::Author), Some("Jane Doe"));
        assert_eq!(doc.byline(BylineField::Title), None);
        assert_eq!(doc.byline(BylineField::default()), Some("Jane Doe"));
    }

    #[test]
    fn test_lede_matches_first_paragraph() {
        let mut doc = NitfDocument::new();
        assert_eq!(doc.lede(), None);

        doc.content.push("First.".to_string());
        doc.content.push("Second.".to_string());
        assert_eq!(doc.lede(), Some(doc.content()[0].as_str()));
    }

    #[test]
    fn test_media_values_filters_absent_fields() {
        let mut doc = NitfDocument::new();

        let mut with_source = Media::new("image");
        with_source.source = Some("http://x/a.jpg".to_string());
        doc.media.push(with_source);
        doc.media.push(Media::default());

        assert_eq!(doc.media_values("source"), ["http://x/a.jpg"]);
        assert_eq!(doc.media_values("type"), ["image", "other"]);
    }
}
