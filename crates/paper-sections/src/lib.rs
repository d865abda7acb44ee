//! Section tree parsing and serialization for split paper output.

mod error;
mod parse;
mod slug;
mod write;

pub use error::{SectionError, SectionResult};
pub use parse::{parse_sections, Section};
pub use slug::slugify;
pub use write::write_sections;
