//! Output formatting utilities

use crate::domain::{Entry, MergeReport};

/// Human-readable age of a timestamp, e.g. "5m ago".
///
/// Both arguments are epoch milliseconds. Timestamps in the future read as
/// "just now"; imported timestamps may sit anywhere in the `i64` range.
pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let sec = now_ms.saturating_sub(timestamp_ms).div_euclid(1000);
    if sec < 10 {
        return "just now".to_string();
    }
    if sec < 60 {
        return format!("{}s ago", sec);
    }
    let min = sec / 60;
    if min < 60 {
        return format!("{}m ago", min);
    }
    let hr = min / 60;
    if hr < 48 {
        return format!("{}h ago", hr);
    }
    let day = hr / 24;
    if day < 14 {
        return format!("{}d ago", day);
    }
    let week = day / 7;
    if week < 8 {
        return format!("{}w ago", week);
    }
    let month = day / 30;
    if month < 24 {
        return format!("{}mo ago", month);
    }
    format!("{}y ago", day / 365)
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One list row: short id, age, title and tags
pub fn format_entry_row(entry: &Entry, now_ms: i64) -> String {
    let mut row = format!(
        "{}  {:>8}  {}",
        entry.short_id(),
        format_relative_time(entry.created_at, now_ms),
        entry.display_title()
    );
    if !entry.tags.is_empty() {
        row.push_str("  ");
        row.push_str(&format_tags(&entry.tags));
    }
    row
}

/// Format a list of entries, one row per line
pub fn format_entry_list(entries: &[Entry], now_ms: i64) -> String {
    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry_row(entry, now_ms));
        output.push('\n');
    }
    output
}

/// Status line under a result list
pub fn format_result_status(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", count)
    }
}

/// Message shown instead of an empty list
pub fn empty_message(has_query: bool) -> &'static str {
    if has_query {
        "No matches. Try fewer words or a tag."
    } else {
        "Nothing here yet. Dump something."
    }
}

/// `<relative time> • #a #b`, or `no tags`
pub fn format_meta_line(entry: &Entry, now_ms: i64) -> String {
    let tags = if entry.tags.is_empty() {
        "no tags".to_string()
    } else {
        format_tags(&entry.tags)
    };
    format!(
        "{} • {}",
        format_relative_time(entry.created_at, now_ms),
        tags
    )
}

/// Full view of one entry: id, meta line, blank line, content
pub fn format_entry_detail(entry: &Entry, now_ms: i64) -> String {
    format!(
        "{}\n{}\n\n{}\n",
        entry.id,
        format_meta_line(entry, now_ms),
        entry.content
    )
}

/// Format tag usage counts for display
pub fn format_tag_counts(counts: &[(String, usize)]) -> String {
    if counts.is_empty() {
        return "No tags found".to_string();
    }

    let width = counts.iter().map(|(_, n)| n.to_string().len()).max().unwrap_or(1);
    let mut output = String::new();
    for (tag, count) in counts {
        output.push_str(&format!("{:>width$}  #{}\n", count, tag, width = width));
    }
    output
}

/// Format tag suggestions, one per line
pub fn format_suggestions(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No suggestions".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}\n", tag));
    }
    output
}

pub fn format_import_report(report: &MergeReport) -> String {
    format!(
        "Import done. Added {}, updated {}, skipped {}.",
        report.added, report.updated, report.skipped
    )
}

pub fn format_export_status(count: usize, destination: &str) -> String {
    let noun = if count == 1 { "entry" } else { "entries" };
    format!("Exported {} {} to {}", count, noun, destination)
}
