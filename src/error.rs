//! Error types for the nitf library.

use std::io;
use thiserror::Error;

/// Result type alias for nitf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing or querying NITF documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed XML reported by the underlying tokenizer.
    #[error("XML syntax error at byte {position}: {source}")]
    Xml {
        /// Byte offset into the input stream where the error was detected.
        position: usize,
        source: quick_xml::Error,
    },

    /// An end tag arrived with no matching open element.
    #[error("unexpected end tag </{tag}> at byte {position}")]
    UnexpectedEndTag {
        /// The offending tag name, in canonical (upper-case) form.
        tag: String,
        position: usize,
    },

    /// Input ended while elements were still open (truncated document).
    #[error("document truncated: <{0}> was never closed")]
    UnclosedElement(String),

    /// Requested headline level does not exist in the document.
    #[error("no headline at level {0}")]
    HeadlineOutOfRange(usize),

    /// Error producing a rendered view of the document.
    #[error("rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::HeadlineOutOfRange(3);
        assert_eq!(err.to_string(), "no headline at level 3");

        let err = Error::UnexpectedEndTag {
            tag: "P".to_string(),
            position: 42,
        };
        assert_eq!(err.to_string(), "unexpected end tag </P> at byte 42");

        let err = Error::UnclosedElement("BODY.CONTENT".to_string());
        assert_eq!(
            err.to_string(),
            "document truncated: <BODY.CONTENT> was never closed"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
