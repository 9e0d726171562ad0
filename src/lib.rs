//! # nitf
//!
//! NITF (News Industry Text Format) wire-feed parsing and content
//! extraction for Rust.
//!
//! This library consumes NITF markup and builds a structured document
//! model: identifiers, dates and keywords from `<docdata>`, publication
//! metadata from `<pubdata>`, revision history, headlines, byline,
//! paragraphs, media references, tagline and bibliography. Downstream
//! publishing pipelines query the model without touching the markup
//! schema. The implementation follows the NITF 3.1 DTD; not every element
//! of the standard is supported, and the schema is treated permissively
//! since real-world feeds deviate from the formal DTD.
//!
//! ## Quick Start
//!
//! ```
//! use nitf::parse_str;
//!
//! fn main() -> nitf::Result<()> {
//!     let doc = parse_str(
//!         "<nitf><body><body.head><hedline><hl1>Storm Hits Coast</hl1></hedline></body.head>\
//!          <body.content><p>Rescue underway.</p></body.content></body></nitf>",
//!     )?;
//!
//!     assert_eq!(doc.headline(1)?, "Storm Hits Coast");
//!     assert_eq!(doc.lede(), Some("Rescue underway."));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Context-sensitive extraction**: same-named elements are
//!   disambiguated by their ancestry (a caption inside a media block never
//!   bleeds into paragraph text)
//! - **Lede handling**: a paragraph flagged `lede="true"` always leads the
//!   content, wherever it appeared in the feed
//! - **Permissive metadata**: unknown docdata/pubdata keys accumulate;
//!   missing attributes never abort the parse
//! - **Renderers**: plain text and JSON views of the parsed document

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Byline, BylineField, DocData, Media, NitfDocument, PubData, Revision};
pub use parser::{DocumentBuilder, NitfParser};
pub use render::{to_json, to_text, JsonFormat};

use std::io::BufRead;
use std::path::Path;

/// Parse a NITF document from a string.
///
/// # Example
///
/// ```
/// let doc = nitf::parse_str("<nitf></nitf>").unwrap();
/// assert!(doc.content().is_empty());
/// ```
pub fn parse_str(input: &str) -> Result<NitfDocument> {
    NitfParser::from_str(input).parse()
}

/// Parse a NITF document from bytes.
pub fn parse_bytes(input: &[u8]) -> Result<NitfDocument> {
    NitfParser::from_bytes(input).parse()
}

/// Parse a NITF document from a buffered reader.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
///
/// let file = File::open("article.xml").unwrap();
/// let doc = nitf::parse_reader(BufReader::new(file)).unwrap();
/// ```
pub fn parse_reader<R: BufRead>(reader: R) -> Result<NitfDocument> {
    NitfParser::from_reader(reader).parse()
}

/// Parse a NITF file.
///
/// # Example
///
/// ```no_run
/// let doc = nitf::parse_file("article.xml").unwrap();
/// println!("{} paragraphs", doc.content().len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<NitfDocument> {
    NitfParser::open(path)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_empty_document() {
        let doc = parse_str("<nitf></nitf>").unwrap();
        assert!(doc.content().is_empty());
        assert!(doc.media().is_empty());
        assert!(doc.doc_data().key_list().is_empty());
    }

    #[test]
    fn test_parse_bytes_matches_parse_str() {
        let xml = "<nitf><body><body.content><p>Same.</p></body.content></body></nitf>";
        let from_str = parse_str(xml).unwrap();
        let from_bytes = parse_bytes(xml.as_bytes()).unwrap();
        assert_eq!(from_str, from_bytes);
    }

    #[test]
    fn test_parse_str_rejects_garbage() {
        assert!(parse_str("this is not xml <<<").is_err());
    }
}
