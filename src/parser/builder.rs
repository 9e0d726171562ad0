//! The event-driven document builder.
//!
//! `DocumentBuilder` consumes element-start, character-data, and element-end
//! events from any event source and incrementally builds a [`NitfDocument`],
//! using the ancestry of open elements to disambiguate same-named fields
//! appearing in different structural positions (a caption inside a media
//! block versus paragraph text, a byline title versus the author, and so
//! on).

use std::borrow::Cow;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Media, NitfDocument};

use super::ancestry::Ancestry;

/// Element-scoped accumulators that live between a start event and the
/// matching end event. These are singular rather than stacked because the
/// NITF schema does not nest paragraphs within paragraphs or media within
/// media.
#[derive(Debug, Default)]
struct Scratch {
    /// Current paragraph text, `Some` while inside `<p>`.
    paragraph: Option<String>,

    /// Whether the current paragraph carried `lede="true"`.
    lede: bool,

    /// Current sub-headline text, `Some` while inside `<hl2>`.
    subheadline: Option<String>,

    /// Media record under construction, `Some` while inside `<media>`.
    media: Option<Media>,
}

/// Builds one [`NitfDocument`] from a stream of markup events.
///
/// Tag and attribute names are folded to upper case on receipt, so event
/// sources may deliver them in any case. One builder parses exactly one
/// document; create a fresh builder per document.
pub struct DocumentBuilder {
    doc: NitfDocument,
    ancestry: Ancestry,
    scratch: Scratch,
    whitespace: Regex,
}

impl DocumentBuilder {
    /// Create a builder with an empty document.
    pub fn new() -> Self {
        Self {
            doc: NitfDocument::new(),
            ancestry: Ancestry::new(),
            scratch: Scratch::default(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Handle an element-start event.
    ///
    /// Attributes are `(name, value)` pairs; names are matched
    /// case-insensitively. Missing or malformed attributes on recognized
    /// elements are non-fatal: the corresponding field keeps its default.
    pub fn start_element(&mut self, name: &str, attrs: &[(String, String)]) {
        let tag = name.to_ascii_uppercase();
        self.ancestry.push(tag.clone());

        match tag.as_str() {
            "HL2" => {
                self.scratch.subheadline = Some(String::new());
            }

            "P" => {
                self.scratch.lede = attr(attrs, "LEDE") == Some("true");
                self.scratch.paragraph = Some(String::new());
            }

            "DOC.COPYRIGHT" => {
                if let Some(holder) = attr(attrs, "HOLDER") {
                    self.doc.doc_data.insert("copyright", holder.to_string());
                }
            }

            "MEDIA" => {
                let media_type = attr(attrs, "MEDIA-TYPE")
                    .filter(|v| !v.is_empty())
                    .unwrap_or("other");
                self.scratch.media = Some(Media::new(media_type));
            }

            "MEDIA-REFERENCE" => {
                if let Some(media) = self.scratch.media.as_mut() {
                    // `data-location` is a non-standard attribute some wire
                    // feeds emit in place of `source`.
                    let source = attr(attrs, "SOURCE")
                        .filter(|v| !v.is_empty())
                        .or_else(|| attr(attrs, "DATA-LOCATION").filter(|v| !v.is_empty()));
                    if let Some(source) = source {
                        media.source = Some(source.to_string());
                    }
                    if let Some(mime) = attr(attrs, "MIME-TYPE") {
                        media.mime_type = Some(mime.to_string());
                    }
                }
            }

            "MEDIA-OBJECT" => {
                if let Some(media) = self.scratch.media.as_mut() {
                    if let Some(encoding) = attr(attrs, "ENCODING") {
                        media.encoding = Some(encoding.to_string());
                    }
                }
            }

            "MEDIA-METADATA" => {
                if let Some(media) = self.scratch.media.as_mut() {
                    if let Some(name) = attr(attrs, "NAME") {
                        let value = attr(attrs, "VALUE").unwrap_or_default();
                        media.set_field(name, value.to_string());
                    }
                }
            }

            "PUBDATA" => {
                let entries = attrs
                    .iter()
                    .map(|(k, v)| (k.to_ascii_lowercase(), v.clone()))
                    .collect();
                self.doc.pub_data.replace(entries);
            }

            "DOC-ID" => {
                if let Some(id) = attr(attrs, "ID-STRING") {
                    self.doc.doc_data.insert("doc-id", id.to_string());
                }
            }

            "KEYWORD" => {
                if let Some(key) = attr(attrs, "KEY") {
                    self.doc.doc_data.push_keyword(key.to_string());
                }
            }

            // ISO-8601 stamps are stored verbatim under the lower-cased
            // tag name: date.release, date.expire, date.issue.
            "DATE.RELEASE" | "DATE.EXPIRE" | "DATE.ISSUE" => {
                if let Some(norm) = attr(attrs, "NORM").filter(|v| !v.is_empty()) {
                    self.doc
                        .doc_data
                        .insert(&tag.to_ascii_lowercase(), norm.to_string());
                }
            }

            "REVISION-HISTORY" => {
                let revision = attrs
                    .iter()
                    .map(|(k, v)| (k.to_ascii_lowercase(), v.clone()))
                    .collect();
                self.doc.revisions.push(revision);
            }

            // Everything else only matters as ancestry context.
            _ => {}
        }
    }

    /// Handle a character-data event.
    ///
    /// Chunks for the same logical field concatenate in arrival order with
    /// no separator; the tokenizer is free to split text arbitrarily.
    pub fn text(&mut self, chunk: &str) {
        // Inside <media-object> the chunk may carry an encoded payload, so
        // it passes through untouched; everywhere else runs of whitespace
        // collapse to a single space.
        let chunk: Cow<'_, str> = if self.ancestry.contains("MEDIA-OBJECT") {
            Cow::Borrowed(chunk)
        } else {
            self.whitespace.replace_all(chunk, " ")
        };

        if self.ancestry.contains("BODY.HEAD") {
            if self.ancestry.contains("BYLINE") {
                if self.ancestry.contains("BYTTL") {
                    self.doc.byline.title.push_str(&chunk);
                } else {
                    self.doc.byline.author.push_str(&chunk);
                }
            } else if self.ancestry.contains("DISTRIBUTOR") {
                self.doc.distributor.push_str(&chunk);
            } else if self.ancestry.contains("DATELINE") {
                if self.ancestry.contains("LOCATION") {
                    self.doc.location.push_str(&chunk);
                }
            } else if self.ancestry.contains("HEDLINE") {
                if self.ancestry.contains("HL2") {
                    if let Some(subheadline) = self.scratch.subheadline.as_mut() {
                        subheadline.push_str(&chunk);
                    }
                } else {
                    self.doc
                        .headlines
                        .hl1
                        .get_or_insert_with(String::new)
                        .push_str(&chunk);
                }
            }
        } else if self.ancestry.contains("BODY.CONTENT") {
            if self.ancestry.contains("MEDIA") && self.ancestry.contains("MEDIA-CAPTION") {
                if let Some(media) = self.scratch.media.as_mut() {
                    media.caption.push_str(&chunk);
                }
            } else if self.ancestry.contains("MEDIA") && self.ancestry.contains("MEDIA-OBJECT") {
                if let Some(media) = self.scratch.media.as_mut() {
                    media.data.push_str(&chunk);
                }
            } else if self.ancestry.contains("P") {
                if let Some(paragraph) = self.scratch.paragraph.as_mut() {
                    paragraph.push_str(&chunk);
                }
            }
        } else if self.ancestry.contains("BODY.END") {
            if self.ancestry.contains("TAGLINE") {
                self.doc.tagline.push_str(&chunk);
            } else if self.ancestry.contains("BIBLIOGRAPHY") {
                self.doc.bibliography.push_str(&chunk);
            }
        }
    }

    /// Handle an element-end event.
    ///
    /// Every end event pops the ancestry stack; an end tag with no matching
    /// open element is malformed input and fails the parse.
    pub fn end_element(&mut self, name: &str) -> Result<()> {
        let tag = name.to_ascii_uppercase();

        if self.ancestry.pop().is_none() {
            // Position is refined by drivers that know the stream offset.
            return Err(Error::UnexpectedEndTag { tag, position: 0 });
        }

        match tag.as_str() {
            "HL1" => {
                if let Some(hl1) = self.doc.headlines.hl1.as_mut() {
                    *hl1 = hl1.trim().to_string();
                }
            }

            "HL2" => {
                if let Some(subheadline) = self.scratch.subheadline.take() {
                    self.doc
                        .headlines
                        .hl2
                        .push(subheadline.trim().to_string());
                }
            }

            "P" => {
                if let Some(paragraph) = self.scratch.paragraph.take() {
                    let paragraph = paragraph.trim().to_string();
                    // The lede leads regardless of where it appeared among
                    // its sibling paragraphs.
                    if self.scratch.lede {
                        self.doc.content.insert(0, paragraph);
                    } else {
                        self.doc.content.push(paragraph);
                    }
                }
                self.scratch.lede = false;
            }

            "MEDIA" => {
                if let Some(media) = self.scratch.media.take() {
                    log::debug!(
                        "collected media record: type={} source={:?}",
                        media.media_type(),
                        media.source()
                    );
                    self.doc.media.push(media);
                }
            }

            _ => {}
        }

        Ok(())
    }

    /// Finish the parse and hand over the completed document.
    ///
    /// Fails if any element is still open, which means the input was
    /// truncated.
    pub fn finish(self) -> Result<NitfDocument> {
        if let Some(open) = self.ancestry.innermost() {
            return Err(Error::UnclosedElement(open.to_string()));
        }

        log::debug!(
            "document complete: {} paragraphs, {} media records, {} revisions",
            self.doc.content.len(),
            self.doc.media.len(),
            self.doc.revisions.len()
        );
        Ok(self.doc)
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive attribute lookup.
fn attr<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
