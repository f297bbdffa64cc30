//! Error types for dumpr

use std::path::PathBuf;
use thiserror::Error;

/// Store operation that failed, used to pick the status text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Load,
    Add,
    Edit,
    Delete,
    Import,
}

impl StorageOp {
    /// Status text for a failed operation
    pub fn status_message(&self) -> &'static str {
        match self {
            StorageOp::Load => "Storage failed. App cannot run.",
            StorageOp::Add => "Storage error. Nothing saved.",
            StorageOp::Edit => "Storage error. Edit not saved.",
            StorageOp::Delete => "Storage error. Delete failed.",
            StorageOp::Import => "Import failed. Could not write entries.",
        }
    }
}

/// Main error type for dumpr application
#[derive(Debug, Error)]
pub enum DumprError {
    #[error("Not a dumpr directory: {0}")]
    NotDumprDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Ambiguous entry id '{0}' matches {1} entries")]
    AmbiguousId(String, usize),

    #[error("Nothing to dump: content is empty")]
    EmptyContent,

    #[error("{} ({reason})", .op.status_message())]
    Storage { op: StorageOp, reason: String },

    #[error("Import failed. Invalid JSON file. ({0})")]
    ImportJson(serde_json::Error),

    #[error("Import failed. File format not recognized.")]
    ImportFormat,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DumprError {
    /// Wrap any error as a failed store operation
    pub fn storage(op: StorageOp, err: impl std::fmt::Display) -> Self {
        DumprError::Storage {
            op,
            reason: err.to_string(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DumprError::NotDumprDirectory(_) => 2,
            DumprError::EntryNotFound(_) => 3,
            DumprError::AmbiguousId(_, _) => 4,
            DumprError::ImportJson(_) | DumprError::ImportFormat => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DumprError::NotDumprDirectory(path) => {
                format!(
                    "Not a dumpr directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'dumpr init' in this directory to create a workspace\n\
                    • Navigate to an existing dumpr directory\n\
                    • Set DUMPR_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            DumprError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'dumpr list' to see entry ids\n\
                    • Ids can be shortened to any unique prefix",
                    id
                )
            }
            DumprError::AmbiguousId(id, count) => {
                format!(
                    "Ambiguous entry id '{}' matches {} entries\n\n\
                    Suggestions:\n\
                    • Type more characters of the id",
                    id, count
                )
            }
            DumprError::ImportFormat => {
                format!(
                    "{}\n\n\
                    Expected either a JSON array of entries or an object with an \"entries\" array\n\
                    Example: dumpr export -o backup.json",
                    self
                )
            }
            DumprError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: dumpr config editor 'vim'\n\
                    • Edit without an editor: dumpr edit <id> --content \"...\"",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DumprError
pub type Result<T> = std::result::Result<T, DumprError>;
