//! Edit an entry with debounced autosave
//!
//! The external editor works on a scratch file. While it runs, the file is
//! polled; every change counts as an input and restarts the autosave timer.
//! Editor exit is the close event and flushes any unsaved change.

use crate::application::lookup::resolve_entry;
use crate::domain::{now_ms, EditBuffer, Entry, SaveState};
use crate::error::{DumprError, Result, StorageOp};
use crate::infrastructure::{EditorSession, EntryStore};
use std::fs;
use std::path::Path;
use std::process::Child;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default interval between checks of the editor's scratch file
pub const DEFAULT_POLL_MS: u64 = 100;

/// Result of an editing session
#[derive(Debug, Clone)]
pub struct EditOutcome {
    /// Last persisted version of the entry
    pub entry: Entry,
    /// Number of successful saves during the session
    pub saves: usize,
    pub state: SaveState,
}

/// Service for editing existing entries
pub struct EditEntryService<S: EntryStore> {
    store: S,
    autosave: Duration,
    poll_interval: Duration,
}

impl<S: EntryStore> EditEntryService<S> {
    pub fn new(store: S, autosave: Duration) -> Self {
        EditEntryService {
            store,
            autosave,
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Replace the content without an editor: one input followed by close
    pub fn replace(&self, id: &str, content: &str) -> Result<EditOutcome> {
        let entry = resolve_entry(&self.store, id)?;
        let mut buffer = EditBuffer::open(entry, self.autosave);

        buffer.input(content, Instant::now());
        let saves = self.close(&mut buffer, now_ms())?;

        Ok(EditOutcome {
            entry: buffer.entry().clone(),
            saves,
            state: buffer.state(),
        })
    }

    /// Edit in an external editor, autosaving while it runs
    pub fn run_in_editor(
        &self,
        id: &str,
        editor: &EditorSession,
        scratch_path: &Path,
    ) -> Result<EditOutcome> {
        let entry = resolve_entry(&self.store, id)?;
        write_scratch(scratch_path, &entry.content)?;
        let mut buffer = EditBuffer::open(entry, self.autosave);

        let result = editor.spawn(scratch_path).and_then(|mut child| {
            let watched = self.watch(&mut child, &mut buffer, scratch_path);
            if watched.is_err() {
                stop_editor(&mut child);
            }
            watched
        });

        if let Err(e) = fs::remove_file(scratch_path) {
            debug!(path = %scratch_path.display(), error = %e, "could not remove scratch file");
        }

        let saves = result?;
        Ok(EditOutcome {
            entry: buffer.entry().clone(),
            saves,
            state: buffer.state(),
        })
    }

    fn watch(&self, child: &mut Child, buffer: &mut EditBuffer, path: &Path) -> Result<usize> {
        let original = buffer.text().to_string();
        let mut saves = 0;

        loop {
            let exited = child.try_wait()?.is_some();

            if let Some(text) = read_scratch(path, &original)? {
                if text != buffer.text() {
                    buffer.input(text, Instant::now());
                }
            }

            if let Some(updated) = buffer.poll(Instant::now(), now_ms()) {
                // A failed autosave keeps the session open; close retries it
                if self.persist(buffer, updated).is_ok() {
                    saves += 1;
                }
            }

            if exited {
                break;
            }
            thread::sleep(self.poll_interval);
        }

        saves += self.close(buffer, now_ms())?;
        Ok(saves)
    }

    fn close(&self, buffer: &mut EditBuffer, now_ms: i64) -> Result<usize> {
        match buffer.flush(now_ms) {
            Some(updated) => {
                self.persist(buffer, updated)?;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn persist(&self, buffer: &mut EditBuffer, updated: Entry) -> Result<()> {
        match self.store.put(&updated) {
            Ok(()) => {
                info!(id = %updated.id, tags = ?updated.tags, "saved entry");
                buffer.saved(updated);
                Ok(())
            }
            Err(e) => {
                warn!(id = %updated.id, error = %e, "save failed");
                buffer.failed();
                Err(DumprError::storage(StorageOp::Edit, e))
            }
        }
    }
}

/// Kill and reap an editor left running after the session failed
fn stop_editor(child: &mut Child) {
    if let Err(e) = child.kill() {
        debug!(pid = child.id(), error = %e, "could not kill editor");
    }
    if let Err(e) = child.wait() {
        debug!(pid = child.id(), error = %e, "could not reap editor");
    }
}

fn write_scratch(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}

/// Read the scratch file; `None` while it is missing (editors replacing it)
fn read_scratch(path: &Path, original: &str) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(strip_editor_newline(text, original))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Editors append a final newline; drop it when the stored content had none
fn strip_editor_newline(mut text: String, original: &str) -> String {
    if !original.ends_with('\n') {
        if text.ends_with("\r\n") {
            text.truncate(text.len() - 2);
        } else if text.ends_with('\n') {
            text.pop();
        }
    }
    text
}
