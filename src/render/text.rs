//! Plain text rendering of a parsed NITF document.

use crate::model::{BylineField, NitfDocument};

/// Produce a single human-readable rendering of the article.
///
/// Concatenates the main headline, the byline author, the dateline location
/// (as a `"{location} - "` prefix to the body), the paragraphs, and the
/// tagline, separated by `separator`. This is a convenience view, not a
/// canonical serialization.
pub fn to_text(doc: &NitfDocument, separator: &str) -> String {
    let mut article = String::new();

    if let Ok(hl1) = doc.headline(1) {
        article.push_str(hl1);
    }
    article.push_str(separator);

    if let Some(author) = doc.byline(BylineField::Author) {
        article.push_str(author);
        article.push_str(separator);
    }

    if let Some(location) = doc.location() {
        article.push_str(location);
        article.push_str(" - ");
    }

    article.push_str(&doc.content().join(separator));

    if let Some(tagline) = doc.tagline() {
        article.push_str(separator);
        article.push_str(tagline);
    }

    article
}
