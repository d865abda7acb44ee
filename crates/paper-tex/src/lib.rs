mod body;
mod comment;
mod inline;
mod sanitize;
mod title;

pub use body::{extract_body, DocumentBody};
pub use inline::inline_sources;
pub use sanitize::sanitize;
pub use title::extract_title;
