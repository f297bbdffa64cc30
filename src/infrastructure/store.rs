//! Entry persistence
//!
//! One record collection keyed by entry id. The file store keeps the whole
//! collection in a single JSON document and replaces it atomically on every
//! write, so a failed write leaves the previous collection intact.

use crate::domain::Entry;
use crate::error::{DumprError, Result};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Version tag of the on-disk store document
pub const STORE_VERSION: u32 = 1;

/// Abstract key-value store for entries
pub trait EntryStore {
    /// All entries, in key order
    fn get_all(&self) -> Result<Vec<Entry>>;

    /// Insert or replace one entry
    fn put(&self, entry: &Entry) -> Result<()>;

    /// Insert or replace several entries in one write; later duplicates win
    fn put_many(&self, entries: &[Entry]) -> Result<()>;

    /// Remove an entry; removing a missing id is not an error
    fn delete(&self, id: &str) -> Result<()>;

    fn get(&self, id: &str) -> Result<Option<Entry>> {
        Ok(self.get_all()?.into_iter().find(|e| e.id == id))
    }

    /// Entries carrying the tag (case-insensitive)
    fn find_by_tag(&self, tag: &str) -> Result<Vec<Entry>> {
        let tag = tag.trim_start_matches('#').to_lowercase();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.tags.contains(&tag))
            .collect())
    }

    /// Entries whose content is exactly `content`
    fn find_by_content(&self, content: &str) -> Result<Vec<Entry>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.content == content)
            .collect())
    }

    /// All entries ordered by creation time, oldest first
    fn list_by_created(&self) -> Result<Vec<Entry>> {
        let mut entries = self.get_all()?;
        entries.sort_by_key(|e| e.created_at);
        Ok(entries)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    entries: Vec<Entry>,
}

/// JSON file implementation of EntryStore
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty store file if none exists
    pub fn initialize(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.save_map(&BTreeMap::new())
    }

    fn load_map(&self) -> Result<BTreeMap<String, Entry>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let document: StoreDocument = serde_json::from_str(&contents)?;
        if document.version != STORE_VERSION {
            return Err(DumprError::Config(format!(
                "Unsupported store version {} in {}",
                document.version,
                self.path.display()
            )));
        }

        debug!(path = %self.path.display(), count = document.entries.len(), "loaded store");
        Ok(document
            .entries
            .into_iter()
            .map(|e| (e.id.clone(), e))
            .collect())
    }

    fn save_map(&self, entries: &BTreeMap<String, Entry>) -> Result<()> {
        let document = StoreDocument {
            version: STORE_VERSION,
            entries: entries.values().cloned().collect(),
        };
        let contents = serde_json::to_string_pretty(&document)?;
        write_atomic(&self.path, &contents)?;
        debug!(path = %self.path.display(), count = entries.len(), "wrote store");
        Ok(())
    }
}

impl EntryStore for JsonFileStore {
    fn get_all(&self) -> Result<Vec<Entry>> {
        Ok(self.load_map()?.into_values().collect())
    }

    fn get(&self, id: &str) -> Result<Option<Entry>> {
        Ok(self.load_map()?.remove(id))
    }

    fn put(&self, entry: &Entry) -> Result<()> {
        self.put_many(std::slice::from_ref(entry))
    }

    fn put_many(&self, entries: &[Entry]) -> Result<()> {
        let mut map = self.load_map()?;
        for entry in entries {
            map.insert(entry.id.clone(), entry.clone());
        }
        self.save_map(&map)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut map = self.load_map()?;
        if map.remove(id).is_some() {
            self.save_map(&map)?;
        }
        Ok(())
    }
}

/// Write file content using a best-effort atomic replace:
/// write to a temp file in the same directory, then rename into place.
///
/// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        "{}.dumpr-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("entries.json"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)?;

    #[cfg(windows)]
    {
        if path.exists() {
            fs::remove_file(path)?;
        }
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// In-memory EntryStore, used by tests and as a scratch store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, Entry>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let store = Self::new();
        for entry in entries {
            store.entries.borrow_mut().insert(entry.id.clone(), entry);
        }
        store
    }

    /// Make every subsequent write fail, to exercise error paths
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.get() {
            return Err(DumprError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        Ok(())
    }
}

impl EntryStore for MemoryStore {
    fn get_all(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.borrow().values().cloned().collect())
    }

    fn put(&self, entry: &Entry) -> Result<()> {
        self.put_many(std::slice::from_ref(entry))
    }

    fn put_many(&self, entries: &[Entry]) -> Result<()> {
        self.check_writable()?;
        let mut map = self.entries.borrow_mut();
        for entry in entries {
            map.insert(entry.id.clone(), entry.clone());
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(id);
        Ok(())
    }
}
