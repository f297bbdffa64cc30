//! Debounced autosave for the entry editor
//!
//! Every input restarts a trailing timer; when it elapses the buffer is saved.
//! Blur and close call [`EditBuffer::flush`], which cancels the timer and
//! saves only if the text differs from what was last persisted.
//!
//! Time is passed in by the caller so the state machine is deterministic.

use crate::domain::entry::Entry;
use std::time::{Duration, Instant};

/// Default autosave delay after the last input
pub const DEFAULT_AUTOSAVE_MS: u64 = 450;

/// Trailing debounce timer
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Debouncer {
            wait,
            deadline: None,
        }
    }

    /// Replace any pending deadline with `now + wait`
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has been reached
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Save indicator shown next to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Saved,
    Saving,
    Failed,
}

impl SaveState {
    pub fn label(&self) -> &'static str {
        match self {
            SaveState::Saved => "Saved",
            SaveState::Saving => "Saving…",
            SaveState::Failed => "Save failed",
        }
    }
}

/// Text being edited for one entry, with its autosave timer
#[derive(Debug, Clone)]
pub struct EditBuffer {
    entry: Entry,
    text: String,
    timer: Debouncer,
    state: SaveState,
}

impl EditBuffer {
    pub fn open(entry: Entry, wait: Duration) -> Self {
        EditBuffer {
            text: entry.content.clone(),
            entry,
            timer: Debouncer::new(wait),
            state: SaveState::Saved,
        }
    }

    /// Last persisted version of the entry
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.text != self.entry.content
    }

    pub fn has_pending_save(&self) -> bool {
        self.timer.is_pending()
    }

    /// Record new text and restart the autosave timer
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.state = SaveState::Saving;
        self.timer.schedule(now);
    }

    /// Entry to persist if the autosave timer has elapsed
    pub fn poll(&mut self, now: Instant, now_ms: i64) -> Option<Entry> {
        if self.timer.fire(now) {
            Some(self.entry.with_content(&self.text, now_ms))
        } else {
            None
        }
    }

    /// Blur/close: cancel the timer and return the entry to persist if changed
    pub fn flush(&mut self, now_ms: i64) -> Option<Entry> {
        self.timer.cancel();
        if !self.is_dirty() {
            self.state = SaveState::Saved;
            return None;
        }
        self.state = SaveState::Saving;
        Some(self.entry.with_content(&self.text, now_ms))
    }

    /// Record a successful save
    pub fn saved(&mut self, entry: Entry) {
        self.entry = entry;
        self.state = SaveState::Saved;
    }

    /// Record a failed save; the text stays dirty so a later flush retries it
    pub fn failed(&mut self) {
        self.state = SaveState::Failed;
    }
}
