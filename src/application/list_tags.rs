//! List tags use case

use crate::domain::tags::tag_counts;
use crate::error::{DumprError, Result, StorageOp};
use crate::infrastructure::EntryStore;

/// Service for listing all tags used in entries.
pub struct ListTagsService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> ListTagsService<S> {
    /// Create a new list tags service.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Tags with the number of entries carrying them, most used first.
    pub fn execute(&self) -> Result<Vec<(String, usize)>> {
        let entries = self
            .store
            .get_all()
            .map_err(|e| DumprError::storage(StorageOp::Load, e))?;

        let mut tags: Vec<(String, usize)> = tag_counts(&entries).into_iter().collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(tags)
    }
}
