//! Substring search across content, title and tags

use crate::domain::entry::Entry;

/// A normalized search query.
///
/// Whitespace runs collapse to a single space and case is ignored.
/// The empty query matches every entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        SearchQuery(raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if self.is_empty() {
            return true;
        }
        let q = self.0.as_str();

        entry.content.to_lowercase().contains(q)
            || entry
                .title
                .as_ref()
                .is_some_and(|t| t.to_lowercase().contains(q))
            || entry.tags.iter().any(|t| t.to_lowercase().contains(q))
    }
}

/// Sort entries by creation time, newest first. Ties keep their order.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Filter entries by the query and sort them newest first
pub fn search(entries: &[Entry], query: &SearchQuery) -> Vec<Entry> {
    let mut results: Vec<Entry> = entries
        .iter()
        .filter(|e| query.matches(e))
        .cloned()
        .collect();
    sort_newest_first(&mut results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, content: &str, created_at: i64) -> Entry {
        Entry::from_parts(id.to_string(), content.to_string(), created_at, created_at)
    }

    #[test]
    fn test_parse_normalizes_whitespace_and_case() {
        assert_eq!(SearchQuery::parse("  Foo \n\t BAR ").as_str(), "foo bar");
        assert!(SearchQuery::parse("   ").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let q = SearchQuery::parse("");
        assert!(q.matches(&entry("1", "anything", 1)));
    }

    #[test]
    fn test_matches_content_case_insensitive() {
        let q = SearchQuery::parse("MILK");
        assert!(q.matches(&entry("1", "buy milk today", 1)));
        assert!(!q.matches(&entry("2", "buy bread", 1)));
    }

    #[test]
    fn test_matches_collapsed_whitespace_in_query() {
        let q = SearchQuery::parse("buy    milk");
        assert!(q.matches(&entry("1", "please buy milk", 1)));
    }

    #[test]
    fn test_matches_title() {
        let mut e = entry("1", "body text", 1);
        e.title = Some("Shopping List".to_string());
        assert!(SearchQuery::parse("shopping").matches(&e));
    }

    #[test]
    fn test_matches_tag_substring() {
        let mut e = entry("1", "body", 1);
        e.tags = vec!["groceries".to_string()];
        assert!(SearchQuery::parse("cer").matches(&e));
    }

    #[test]
    fn test_search_filters_and_sorts_newest_first() {
        let entries = vec![
            entry("old", "note #work", 10),
            entry("new", "another #work", 30),
            entry("mid", "unrelated", 20),
        ];

        let all = search(&entries, &SearchQuery::parse(""));
        let ids: Vec<&str> = all.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);

        let work = search(&entries, &SearchQuery::parse("work"));
        let ids: Vec<&str> = work.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let mut entries = vec![entry("a", "x", 5), entry("b", "y", 5), entry("c", "z", 9)];
        sort_newest_first(&mut entries);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
