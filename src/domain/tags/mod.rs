//! Tag system

pub mod parser;
pub mod suggest;

// Re-export main types
pub use parser::extract_tags;
pub use suggest::{fragment_at, insert_tag, suggest, tag_counts, TagFragment};
