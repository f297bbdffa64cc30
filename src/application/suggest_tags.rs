//! Tag suggestions for text being typed

use crate::domain::tags::{insert_tag, suggest, tag_counts};
use crate::error::{DumprError, Result, StorageOp};
use crate::infrastructure::EntryStore;

/// Service offering tag completions from the tags already in use
pub struct SuggestTagsService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> SuggestTagsService<S> {
    pub fn new(store: S) -> Self {
        SuggestTagsService { store }
    }

    /// Ranked tag suggestions for `text` with the cursor at `cursor` characters.
    ///
    /// Without a cursor, the end of the text is used.
    pub fn suggest(&self, text: &str, cursor: Option<usize>, limit: usize) -> Result<Vec<String>> {
        let entries = self
            .store
            .get_all()
            .map_err(|e| DumprError::storage(StorageOp::Load, e))?;
        let cursor = cursor.unwrap_or_else(|| text.chars().count());

        Ok(suggest(text, cursor, &tag_counts(&entries), limit))
    }

    /// Insert a picked tag at the cursor; returns the new text and cursor
    pub fn pick(&self, text: &str, cursor: Option<usize>, tag: &str) -> (String, usize) {
        let cursor = cursor.unwrap_or_else(|| text.chars().count());
        let tag = tag.trim_start_matches('#').to_lowercase();
        insert_tag(text, cursor, cursor, &tag)
    }
}
