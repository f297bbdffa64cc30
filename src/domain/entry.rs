//! Entry record and derived fields

use crate::domain::tags::extract_tags;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Maximum title length in characters before truncation
const TITLE_MAX_CHARS: usize = 80;

/// Number of id characters shown in listings
pub const SHORT_ID_LEN: usize = 8;

/// Current wall clock time in Unix epoch milliseconds
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Generate a fresh opaque identifier
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// One user-authored text record with derived title and tags.
///
/// Serialized with camelCase keys so stored and exported documents use
/// `createdAt`/`updatedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub content: String,
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Entry {
    /// Create a new entry from submitted content.
    ///
    /// Returns `None` when the content is blank; blank submissions never
    /// create an entry.
    pub fn create(content: &str, now_ms: i64) -> Option<Self> {
        if content.trim().is_empty() {
            return None;
        }
        Some(Self::from_parts(new_id(), content.to_string(), now_ms, now_ms))
    }

    /// Build an entry from stored parts, deriving title and tags from content
    pub fn from_parts(id: String, content: String, created_at: i64, updated_at: i64) -> Self {
        Entry {
            title: compute_title(&content),
            tags: extract_tags(&content),
            id,
            content,
            created_at,
            updated_at,
        }
    }

    /// Copy of this entry with new content, recomputed title and tags
    pub fn with_content(&self, content: &str, now_ms: i64) -> Self {
        Self::from_parts(
            self.id.clone(),
            content.to_string(),
            self.created_at,
            now_ms,
        )
    }

    /// Abbreviated id for listings
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    /// Title for display, falling back to flattened content
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        let flat = truncate_one_line(&self.content, TITLE_MAX_CHARS);
        if flat.is_empty() {
            "(empty)".to_string()
        } else {
            flat
        }
    }
}

/// Derive a title: the first line of the trimmed content, truncated.
///
/// Blank content has no title.
pub fn compute_title(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return None;
    }

    let first_line = trimmed.split('\n').next().unwrap_or_default().trim();
    if !first_line.is_empty() {
        return Some(truncate_chars(first_line, TITLE_MAX_CHARS));
    }

    Some(truncate_one_line(trimmed, 40))
}

/// Collapse whitespace runs to single spaces and truncate to `max_len` characters
pub fn truncate_one_line(text: &str, max_len: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&flat, max_len)
}

fn truncate_chars(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
