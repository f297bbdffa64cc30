//! Search and list entries

use crate::domain::{search, Entry, SearchQuery};
use crate::error::{DumprError, Result, StorageOp};
use crate::infrastructure::EntryStore;
use tracing::debug;

/// Entries matching a query, newest first
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub query: SearchQuery,
    pub entries: Vec<Entry>,
    /// Number of matches before any limit was applied
    pub matched: usize,
}

/// Service for searching entries
pub struct SearchEntriesService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> SearchEntriesService<S> {
    pub fn new(store: S) -> Self {
        SearchEntriesService { store }
    }

    /// Run a search; `limit` caps the number of entries returned
    pub fn execute(&self, raw_query: &str, limit: Option<usize>) -> Result<SearchResults> {
        let query = SearchQuery::parse(raw_query);
        let all = self
            .store
            .get_all()
            .map_err(|e| DumprError::storage(StorageOp::Load, e))?;

        let mut entries = search(&all, &query);
        let matched = entries.len();
        if let Some(n) = limit {
            entries.truncate(n);
        }

        debug!(query = query.as_str(), total = all.len(), matched, "search");
        Ok(SearchResults {
            query,
            entries,
            matched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;

    fn service() -> SearchEntriesService<MemoryStore> {
        SearchEntriesService::new(MemoryStore::with_entries(vec![
            Entry::from_parts("1".to_string(), "milk #errand".to_string(), 10, 10),
            Entry::from_parts("2".to_string(), "call bank".to_string(), 20, 20),
            Entry::from_parts("3".to_string(), "eggs #errand".to_string(), 30, 30),
        ]))
    }

    #[test]
    fn test_empty_query_lists_all_newest_first() {
        let results = service().execute("  ", None).unwrap();
        assert!(results.query.is_empty());
        let ids: Vec<&str> = results.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_query_filters() {
        let results = service().execute("ERRAND", None).unwrap();
        let ids: Vec<&str> = results.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_limit() {
        let results = service().execute("", Some(1)).unwrap();
        assert_eq!(results.entries.len(), 1);
        assert_eq!(results.entries[0].id, "3");
        assert_eq!(results.matched, 3);
    }

    #[test]
    fn test_no_matches() {
        let results = service().execute("nothing", None).unwrap();
        assert!(results.entries.is_empty());
        assert_eq!(results.matched, 0);
    }
}
