//! Rendering module for human-readable and machine-readable views of a
//! parsed document.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;
