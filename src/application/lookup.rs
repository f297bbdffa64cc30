//! Resolve a user-supplied id or id prefix to an entry

use crate::domain::Entry;
use crate::error::{DumprError, Result, StorageOp};
use crate::infrastructure::EntryStore;

/// Find the entry whose id equals `id`, or the single entry whose id starts with it.
pub fn resolve_entry<S: EntryStore>(store: &S, id: &str) -> Result<Entry> {
    let id = id.trim();
    if id.is_empty() {
        return Err(DumprError::EntryNotFound(id.to_string()));
    }

    let entries = store
        .get_all()
        .map_err(|e| DumprError::storage(StorageOp::Load, e))?;

    if let Some(exact) = entries.iter().find(|e| e.id == id) {
        return Ok(exact.clone());
    }

    let mut matches: Vec<Entry> = entries
        .into_iter()
        .filter(|e| e.id.starts_with(id))
        .collect();

    match matches.len() {
        0 => Err(DumprError::EntryNotFound(id.to_string())),
        1 => Ok(matches.remove(0)),
        n => Err(DumprError::AmbiguousId(id.to_string(), n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;

    fn store() -> MemoryStore {
        MemoryStore::with_entries(vec![
            Entry::from_parts("abc123".to_string(), "one".to_string(), 1, 1),
            Entry::from_parts("abd456".to_string(), "two".to_string(), 2, 2),
            Entry::from_parts("ab".to_string(), "three".to_string(), 3, 3),
        ])
    }

    #[test]
    fn test_exact_match_wins_over_prefix() {
        assert_eq!(resolve_entry(&store(), "ab").unwrap().content, "three");
    }

    #[test]
    fn test_unique_prefix() {
        assert_eq!(resolve_entry(&store(), "abc").unwrap().content, "one");
        assert_eq!(resolve_entry(&store(), " abd ").unwrap().content, "two");
    }

    #[test]
    fn test_ambiguous_prefix() {
        match resolve_entry(&store(), "a").unwrap_err() {
            DumprError::AmbiguousId(id, n) => {
                assert_eq!(id, "a");
                assert_eq!(n, 3);
            }
            other => panic!("Expected AmbiguousId, got {other}"),
        }
    }

    #[test]
    fn test_not_found() {
        assert!(matches!(
            resolve_entry(&store(), "zzz"),
            Err(DumprError::EntryNotFound(_))
        ));
        assert!(matches!(
            resolve_entry(&store(), "  "),
            Err(DumprError::EntryNotFound(_))
        ));
    }
}
