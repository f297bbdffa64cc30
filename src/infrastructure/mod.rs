//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod repository;
pub mod store;

pub use config::Config;
pub use editor::EditorSession;
pub use repository::{FileSystemRepository, WorkspaceRepository};
pub use store::{EntryStore, JsonFileStore, MemoryStore};
