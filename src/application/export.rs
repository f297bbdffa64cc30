//! Export all entries to a JSON document

use crate::domain::ExportDocument;
use crate::error::{DumprError, Result, StorageOp};
use crate::infrastructure::EntryStore;
use std::fs;
use std::path::Path;
use tracing::info;

/// Service for exporting the entry collection
pub struct ExportService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> ExportService<S> {
    pub fn new(store: S) -> Self {
        ExportService { store }
    }

    /// Snapshot every entry, newest first
    pub fn document(&self, now_ms: i64) -> Result<ExportDocument> {
        let entries = self
            .store
            .get_all()
            .map_err(|e| DumprError::storage(StorageOp::Load, e))?;
        Ok(ExportDocument::new(&entries, now_ms))
    }

    /// Write the export document to `path`; returns the number of entries
    pub fn write_to(&self, path: &Path, now_ms: i64) -> Result<usize> {
        let document = self.document(now_ms)?;
        let json = document.to_json_pretty()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, json)?;

        info!(path = %path.display(), count = document.entries.len(), "exported entries");
        Ok(document.entries.len())
    }
}
