//! XML event source driving the document builder.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::NitfDocument;

use super::builder::DocumentBuilder;

/// NITF document parser over an XML byte stream.
///
/// Wraps a `quick_xml::Reader` and feeds its events to a
/// [`DocumentBuilder`](super::DocumentBuilder): start and end tags push and
/// pop the ancestry stack, text and CDATA become character-data chunks. Tag
/// and attribute names are matched case-insensitively, so feeds may use
/// either case convention.
pub struct NitfParser<R: BufRead> {
    reader: Reader<R>,
}

impl<'a> NitfParser<&'a [u8]> {
    /// Parse from an in-memory string.
    pub fn from_str(input: &'a str) -> Self {
        Self {
            reader: Reader::from_str(input),
        }
    }

    /// Parse from an in-memory byte slice.
    pub fn from_bytes(input: &'a [u8]) -> Self {
        Self {
            reader: Reader::from_reader(input),
        }
    }
}

impl NitfParser<BufReader<File>> {
    /// Open a NITF file for parsing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> NitfParser<R> {
    /// Parse from any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Reader::from_reader(reader),
        }
    }

    /// Run the parse to completion and return the document.
    ///
    /// Malformed markup (tokenizer errors, mismatched or surplus end tags,
    /// truncated input) is fatal; missing or malformed attributes on
    /// recognized elements are not.
    pub fn parse(mut self) -> Result<NitfDocument> {
        let mut builder = DocumentBuilder::new();
        let mut buf = Vec::new();

        loop {
            match self.reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let name = element_name(&e);
                    let attrs = collect_attrs(&e);
                    builder.start_element(&name, &attrs);
                }

                // <tag/> behaves as start immediately followed by end.
                Ok(Event::Empty(e)) => {
                    let name = element_name(&e);
                    let attrs = collect_attrs(&e);
                    builder.start_element(&name, &attrs);
                    self.end_element(&mut builder, &name)?;
                }

                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    self.end_element(&mut builder, &name)?;
                }

                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(|source| Error::Xml {
                        position: self.reader.buffer_position(),
                        source,
                    })?;
                    builder.text(&text);
                }

                // CDATA carries no entity references; forward it raw so
                // encoded media payloads survive byte-for-byte.
                Ok(Event::CData(e)) => {
                    builder.text(&String::from_utf8_lossy(&e));
                }

                Ok(Event::Eof) => break,

                // Declarations, comments, PIs and doctypes carry nothing
                // the document model cares about.
                Ok(_) => {}

                Err(source) => {
                    return Err(Error::Xml {
                        position: self.reader.buffer_position(),
                        source,
                    });
                }
            }
            buf.clear();
        }

        builder.finish()
    }

    fn end_element(&self, builder: &mut DocumentBuilder, name: &str) -> Result<()> {
        builder.end_element(name).map_err(|err| match err {
            Error::UnexpectedEndTag { tag, .. } => Error::UnexpectedEndTag {
                tag,
                position: self.reader.buffer_position(),
            },
            other => other,
        })
    }
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn collect_attrs(e: &BytesStart<'_>) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        match attr.unescape_value() {
            Ok(value) => attrs.push((key, value.into_owned())),
            Err(err) => log::warn!("skipping malformed attribute {}: {}", key, err),
        }
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BylineField;

    #[test]
    fn test_storm_scenario() {
        let xml = "<nitf><body><body.head><hedline><hl1>  Storm Hits Coast  </hl1></hedline>\
                   </body.head><body.content><body.content><p lede=\"true\">Rescue underway.</p>\
                   <p>Officials respond.</p></body.content></body.content></body></nitf>";
        let doc = NitfParser::from_str(xml).parse().unwrap();

        assert_eq!(doc.headline(1).unwrap(), "Storm Hits Coast");
        assert_eq!(doc.content(), ["Rescue underway.", "Officials respond."]);
        assert_eq!(doc.lede(), Some("Rescue underway."));
    }

    #[test]
    fn test_media_scenario() {
        let xml = r#"<nitf><body><body.content>
            <media media-type="image">
                <media-reference source="http://x/img.jpg" mime-type="image/jpeg"/>
                <media-caption>A dog</media-caption>
            </media>
        </body.content></body></nitf>"#;
        let doc = NitfParser::from_str(xml).parse().unwrap();

        assert_eq!(doc.media().len(), 1);
        let media = &doc.media()[0];
        assert_eq!(media.media_type(), "image");
        assert_eq!(media.source(), Some("http://x/img.jpg"));
        assert_eq!(media.caption(), Some("A dog"));
    }

    #[test]
    fn test_empty_element_syntax() {
        let xml = r#"<nitf><head><docdata><doc-id id-string="urn:x:1"/></docdata></head></nitf>"#;
        let doc = NitfParser::from_str(xml).parse().unwrap();
        assert_eq!(doc.doc_data().get("doc-id"), Some("urn:x:1"));
    }

    #[test]
    fn test_entities_decoded_in_text() {
        let xml = "<nitf><body><body.content><p>Smith &amp; Jones</p></body.content></body></nitf>";
        let doc = NitfParser::from_str(xml).parse().unwrap();
        assert_eq!(doc.content(), ["Smith & Jones"]);
    }

    #[test]
    fn test_cdata_preserved_in_media_object() {
        let xml = "<nitf><body><body.content><media><media-object encoding=\"base64\">\
                   <![CDATA[QUJD\nREVG]]></media-object></media></body.content></body></nitf>";
        let doc = NitfParser::from_str(xml).parse().unwrap();
        assert_eq!(doc.media()[0].data(), Some("QUJD\nREVG"));
    }

    #[test]
    fn test_uppercase_feed_matches() {
        let xml = "<NITF><BODY><BODY.HEAD><BYLINE>By Anyone</BYLINE></BODY.HEAD></BODY></NITF>";
        let doc = NitfParser::from_str(xml).parse().unwrap();
        assert_eq!(doc.byline(BylineField::Author), Some("By Anyone"));
    }

    #[test]
    fn test_unbalanced_markup_is_fatal() {
        let xml = "<nitf><body></body></nitf></extra>";
        let err = NitfParser::from_str(xml).parse().unwrap_err();
        assert!(matches!(
            err,
            Error::Xml { .. } | Error::UnexpectedEndTag { .. }
        ));
    }

    #[test]
    fn test_truncated_document_is_fatal() {
        let xml = "<nitf><body><body.content><p>cut off";
        let err = NitfParser::from_str(xml).parse().unwrap_err();
        assert!(matches!(
            err,
            Error::Xml { .. } | Error::UnclosedElement(_)
        ));
    }

    #[test]
    fn test_reparse_is_deterministic() {
        let xml = r#"<nitf><head><docdata><doc-id id-string="a"/><keyword key="k1"/>
            </docdata></head><body><body.head><hedline><hl1>H</hl1><hl2>S</hl2></hedline>
            </body.head><body.content><p>One.</p><p lede="true">Zero.</p></body.content>
            </body></nitf>"#;
        let first = NitfParser::from_str(xml).parse().unwrap();
        let second = NitfParser::from_str(xml).parse().unwrap();
        assert_eq!(first, second);
    }
}
