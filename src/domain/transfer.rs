//! Export document and last-write-wins import merge

use crate::domain::entry::{new_id, Entry};
use crate::domain::search::sort_newest_first;
use crate::error::{DumprError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Version tag written into export documents
pub const EXPORT_VERSION: u32 = 1;

/// Full collection snapshot for backup or moving between machines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: u32,
    pub exported_at: i64,
    pub entries: Vec<Entry>,
}

impl ExportDocument {
    /// Snapshot the entries, newest first
    pub fn new(entries: &[Entry], now_ms: i64) -> Self {
        let mut entries = entries.to_vec();
        sort_newest_first(&mut entries);
        ExportDocument {
            version: EXPORT_VERSION,
            exported_at: now_ms,
            entries,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Default file name for an export made on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("dumpr-export-{}.json", date.format("%Y-%m-%d"))
}

/// Parse import text into raw records.
///
/// Accepts a bare array or an object with an `entries` array. Input that
/// is not valid UTF-8 counts as invalid JSON.
pub fn parse_import(data: impl AsRef<[u8]>) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_slice(data.as_ref()).map_err(DumprError::ImportJson)?;
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("entries") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(DumprError::ImportFormat),
        },
        _ => Err(DumprError::ImportFormat),
    }
}

fn millis(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f as i64)
    })
}

/// Turn one raw imported record into an entry.
///
/// Missing or mistyped fields fall back: empty content, `createdAt` of now,
/// `updatedAt` of `createdAt`, a fresh id. Title and tags are always
/// re-derived from content.
pub fn normalize_imported(raw: &Value, now_ms: i64) -> Entry {
    let content = raw
        .get("content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let created_at = millis(raw.get("createdAt")).unwrap_or(now_ms);
    let updated_at = millis(raw.get("updatedAt")).unwrap_or(created_at);
    let id = raw
        .get("id")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(new_id);

    Entry::from_parts(id, content, created_at, updated_at)
}

/// Counts reported after an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
}

/// Result of merging an import into the existing collection
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    /// Entries to write, in import order
    pub to_save: Vec<Entry>,
    pub report: MergeReport,
}

/// Merge incoming entries into existing ones, last write wins per id.
///
/// An incoming entry replaces the known one when its `updatedAt` is greater
/// or equal; strictly older entries are skipped. Incoming entries are applied
/// in order, so duplicates within one import follow the same rule.
pub fn merge(existing: &[Entry], incoming: Vec<Entry>) -> MergeOutcome {
    let mut known: HashMap<String, i64> = existing
        .iter()
        .map(|e| (e.id.clone(), e.updated_at))
        .collect();
    let mut outcome = MergeOutcome::default();

    for entry in incoming {
        match known.get(&entry.id) {
            None => {
                outcome.report.added += 1;
            }
            Some(&current) if entry.updated_at >= current => {
                outcome.report.updated += 1;
            }
            Some(_) => {
                outcome.report.skipped += 1;
                continue;
            }
        }
        known.insert(entry.id.clone(), entry.updated_at);
        outcome.to_save.push(entry);
    }

    outcome
}
