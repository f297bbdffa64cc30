//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod delete_entry;
pub mod edit_entry;
pub mod export;
pub mod import;
pub mod init;
pub mod list_tags;
pub mod lookup;
pub mod manage_config;
pub mod search_entries;
pub mod suggest_tags;

pub use add_entry::AddEntryService;
pub use delete_entry::{DeleteEntryService, DeleteOutcome};
pub use edit_entry::{EditEntryService, EditOutcome};
pub use export::ExportService;
pub use import::ImportService;
pub use list_tags::ListTagsService;
pub use lookup::resolve_entry;
pub use manage_config::ConfigService;
pub use search_entries::{SearchEntriesService, SearchResults};
pub use suggest_tags::SuggestTagsService;
