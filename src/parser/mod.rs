//! Event-driven NITF parsing.

mod ancestry;
mod builder;
mod reader;

pub use ancestry::Ancestry;
pub use builder::DocumentBuilder;
pub use reader::NitfParser;
