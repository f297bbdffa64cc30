//! Delete an entry after explicit confirmation

use crate::application::lookup::resolve_entry;
use crate::domain::Entry;
use crate::error::{DumprError, Result, StorageOp};
use crate::infrastructure::EntryStore;
use tracing::{info, warn};

/// What a delete request did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Entry),
    /// Confirmation missing; the entry is untouched
    NotConfirmed(Entry),
}

/// Service for deleting entries
pub struct DeleteEntryService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> DeleteEntryService<S> {
    pub fn new(store: S) -> Self {
        DeleteEntryService { store }
    }

    /// Delete the entry if `confirmed`; deletion is permanent
    pub fn execute(&self, id: &str, confirmed: bool) -> Result<DeleteOutcome> {
        let entry = resolve_entry(&self.store, id)?;
        if !confirmed {
            return Ok(DeleteOutcome::NotConfirmed(entry));
        }

        self.store.delete(&entry.id).map_err(|e| {
            warn!(id = %entry.id, error = %e, "delete failed");
            DumprError::storage(StorageOp::Delete, e)
        })?;

        info!(id = %entry.id, "deleted entry");
        Ok(DeleteOutcome::Deleted(entry))
    }
}
