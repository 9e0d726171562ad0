//! Media records extracted from `<media>` blocks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single media reference from the body of a NITF document.
///
/// One record is built per `<media>` element and appended to the document
/// only when that element closes; partially built records are never visible
/// to queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Media {
    /// Media type from the `media-type` attribute (`"other"` when absent).
    #[serde(rename = "type")]
    pub(crate) media_type: String,

    /// Location of the media payload (`source`, or the non-standard
    /// `data-location` some wire feeds emit instead).
    pub(crate) source: Option<String>,

    /// MIME type of the referenced payload.
    #[serde(rename = "mime-type")]
    pub(crate) mime_type: Option<String>,

    /// Human-readable caption, accumulated from character data.
    pub(crate) caption: String,

    /// Inline payload from `<media-object>`, typically base64. Preserved
    /// byte-for-byte; no whitespace normalization is applied.
    pub(crate) data: String,

    /// Transfer encoding of the inline payload.
    pub(crate) encoding: Option<String>,

    /// Producer of the media item.
    pub(crate) producer: Option<String>,

    /// Schema-extensible name/value pairs from `<media-metadata>` elements
    /// whose names do not match a dedicated field above.
    pub(crate) meta: HashMap<String, String>,
}

impl Media {
    pub(crate) fn new(media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            source: None,
            mime_type: None,
            caption: String::new(),
            data: String::new(),
            encoding: None,
            producer: None,
            meta: HashMap::new(),
        }
    }

    /// The media type, e.g. `"image"` or `"video"`.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Location of the media payload, if one was given.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// MIME type of the payload, if one was given.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Caption text, or `None` if the media block carried no caption.
    pub fn caption(&self) -> Option<&str> {
        non_empty(&self.caption)
    }

    /// Inline payload data, or `None` if the media block carried none.
    pub fn data(&self) -> Option<&str> {
        non_empty(&self.data)
    }

    /// Transfer encoding of the inline payload, if one was given.
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Producer of the media item, if one was given.
    pub fn producer(&self) -> Option<&str> {
        self.producer.as_deref()
    }

    /// Extra metadata pairs not covered by the dedicated fields.
    pub fn meta(&self) -> &HashMap<String, String> {
        &self.meta
    }

    /// Look up a field by its NITF name.
    ///
    /// Dedicated fields (`type`, `source`, `mime-type`, `caption`, `data`,
    /// `encoding`, `producer`) are matched case-insensitively; any other
    /// name is looked up in the `meta` map.
    pub fn get(&self, field: &str) -> Option<&str> {
        match field.to_ascii_lowercase().as_str() {
            "type" => Some(&self.media_type),
            "source" => self.source(),
            "mime-type" => self.mime_type(),
            "caption" => self.caption(),
            "data" => self.data(),
            "encoding" => self.encoding(),
            "producer" => self.producer(),
            _ => self.meta.get(field).map(String::as_str),
        }
    }

    /// Store a `<media-metadata>` pair. Names matching a dedicated field
    /// overwrite that field; anything else lands in the `meta` map.
    pub(crate) fn set_field(&mut self, name: &str, value: String) {
        match name.to_ascii_lowercase().as_str() {
            "type" => self.media_type = value,
            "source" => self.source = Some(value),
            "mime-type" => self.mime_type = Some(value),
            "caption" => self.caption = value,
            "data" => self.data = value,
            "encoding" => self.encoding = Some(value),
            "producer" => self.producer = Some(value),
            _ => {
                self.meta.insert(name.to_string(), value);
            }
        }
    }
}

impl Default for Media {
    fn default() -> Self {
        Self::new("other")
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
