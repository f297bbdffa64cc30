//! Dump a new entry

use crate::domain::Entry;
use crate::error::{DumprError, Result, StorageOp};
use crate::infrastructure::EntryStore;
use tracing::{info, warn};

/// Service for capturing new entries
pub struct AddEntryService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> AddEntryService<S> {
    pub fn new(store: S) -> Self {
        AddEntryService { store }
    }

    /// Create and persist an entry from submitted content.
    ///
    /// Blank content is rejected; nothing is written.
    pub fn execute(&self, content: &str, now_ms: i64) -> Result<Entry> {
        let entry = Entry::create(content, now_ms).ok_or(DumprError::EmptyContent)?;

        self.store.put(&entry).map_err(|e| {
            warn!(error = %e, "failed to save new entry");
            DumprError::storage(StorageOp::Add, e)
        })?;

        info!(id = %entry.id, tags = ?entry.tags, "added entry");
        Ok(entry)
    }
}
