//! Tag extraction from entry content

use regex::Regex;
use std::sync::OnceLock;

/// Regex for hashtags: `#` at start or after whitespace, then a letter or digit,
/// then letters, digits, dashes or underscores
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)(?:^|\s)#([a-z0-9][a-z0-9_-]*)").unwrap())
}

/// Extract all tags from content, lowercased and deduplicated.
///
/// Order follows first occurrence in the text.
pub fn extract_tags(content: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for captures in tag_regex().captures_iter(content) {
        let tag = captures[1].to_lowercase();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
