//! Tag autocomplete at the cursor
//!
//! Cursor positions are character offsets into the text, not byte offsets.

use crate::domain::entry::Entry;
use crate::domain::tags::extract_tags;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Default number of suggestions offered
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// A partially typed tag ending at the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFragment {
    /// Character index of the `#` that starts the fragment
    pub hash_index: usize,
    /// Lowercased text typed after the `#` (may be empty)
    pub fragment: String,
}

fn fragment_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)(?:^|\s)#([a-z0-9_-]*)$").unwrap())
}

/// Byte offset of the given character index, clamped to the end of the text
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Count how many entries carry each tag
pub fn tag_counts(entries: &[Entry]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        for tag in &entry.tags {
            *counts.entry(tag.to_lowercase()).or_insert(0) += 1;
        }
    }
    counts
}

/// Find the tag fragment being typed just before the cursor
pub fn fragment_at(text: &str, cursor: usize) -> Option<TagFragment> {
    let upto = &text[..byte_offset(text, cursor)];
    let captures = fragment_regex().captures(upto)?;
    let hash_byte = upto.rfind('#')?;

    Some(TagFragment {
        hash_index: upto[..hash_byte].chars().count(),
        fragment: captures[1].to_lowercase(),
    })
}

/// Rank known tags for the text and cursor position.
///
/// While a fragment is being typed, tags starting with it are offered (all
/// tags for a bare `#`). Otherwise tags not yet used in the text are offered.
/// Ranking is by usage count, most used first, then alphabetically.
pub fn suggest(
    text: &str,
    cursor: usize,
    counts: &BTreeMap<String, usize>,
    limit: usize,
) -> Vec<String> {
    if counts.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<&String> = match fragment_at(text, cursor) {
        Some(info) if !info.fragment.is_empty() => counts
            .keys()
            .filter(|tag| tag.starts_with(&info.fragment))
            .collect(),
        Some(_) => counts.keys().collect(),
        None => {
            let used = extract_tags(text);
            counts.keys().filter(|tag| !used.contains(tag)).collect()
        }
    };

    candidates.sort_by(|a, b| counts[*b].cmp(&counts[*a]).then_with(|| a.cmp(b)));
    candidates.into_iter().take(limit).cloned().collect()
}

/// Insert `#tag ` at the selection, completing a fragment if one is being typed.
///
/// Returns the new text and the cursor position after the insertion.
pub fn insert_tag(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    tag: &str,
) -> (String, usize) {
    let selection_end = selection_end.max(selection_start);
    let end_byte = byte_offset(text, selection_end);
    let insert = format!("#{} ", tag);

    if let Some(info) = fragment_at(text, selection_start) {
        let start_byte = byte_offset(text, info.hash_index);
        let next = format!("{}{}{}", &text[..start_byte], insert, &text[end_byte..]);
        return (next, info.hash_index + insert.chars().count());
    }

    let before = &text[..byte_offset(text, selection_start)];
    let after = &text[end_byte..];
    let insert = if !before.is_empty() && !before.ends_with(char::is_whitespace) {
        format!(" {}", insert)
    } else {
        insert
    };

    let cursor = before.chars().count() + insert.chars().count();
    (format!("{}{}{}", before, insert, after), cursor)
}
