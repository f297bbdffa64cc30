//! dumpr - quick-capture notes from the terminal
//!
//! Notes are dumped as free text; `#tags` inside the text are extracted
//! automatically. Entries live in a local JSON store under `.dumpr/`, can be
//! searched, edited with debounced autosave, and exported or merged back in
//! through a versioned JSON document.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DumprError;
