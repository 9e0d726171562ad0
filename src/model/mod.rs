//! Document model types for parsed NITF content.
//!
//! The model is built incrementally by the parser and is read-only once
//! parsing completes. One `NitfDocument` corresponds to exactly one parsed
//! document.

mod document;
mod media;

pub use document::{Byline, BylineField, DocData, NitfDocument, PubData, Revision};
pub use media::Media;
