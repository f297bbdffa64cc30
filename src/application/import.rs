//! Import entries from a JSON document, merging by last write wins

use crate::domain::transfer::{merge, normalize_imported, parse_import};
use crate::domain::{Entry, MergeReport};
use crate::error::{DumprError, Result, StorageOp};
use crate::infrastructure::EntryStore;
use tracing::{info, warn};

/// Service for importing entries
pub struct ImportService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> ImportService<S> {
    pub fn new(store: S) -> Self {
        ImportService { store }
    }

    /// Merge the entries in `text` into the store.
    ///
    /// Nothing is written unless the whole document parses. All accepted
    /// entries are written in one store operation.
    pub fn execute(&self, data: impl AsRef<[u8]>, now_ms: i64) -> Result<MergeReport> {
        let raw = parse_import(data)?;
        let incoming: Vec<Entry> = raw
            .iter()
            .map(|record| normalize_imported(record, now_ms))
            .collect();

        let existing = self
            .store
            .get_all()
            .map_err(|e| DumprError::storage(StorageOp::Load, e))?;
        let outcome = merge(&existing, incoming);

        if !outcome.to_save.is_empty() {
            self.store.put_many(&outcome.to_save).map_err(|e| {
                warn!(error = %e, "import write failed");
                DumprError::storage(StorageOp::Import, e)
            })?;
        }

        let report = outcome.report;
        info!(
            added = report.added,
            updated = report.updated,
            skipped = report.skipped,
            "imported entries"
        );
        Ok(report)
    }
}
