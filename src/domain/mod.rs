//! Domain layer - Business logic and domain models

pub mod autosave;
pub mod entry;
pub mod search;
pub mod tags;
pub mod transfer;

pub use autosave::{Debouncer, EditBuffer, SaveState};
pub use entry::{compute_title, now_ms, truncate_one_line, Entry};
pub use search::{search, sort_newest_first, SearchQuery};
pub use transfer::{ExportDocument, MergeOutcome, MergeReport};
