//! Configuration management

use crate::domain::autosave::DEFAULT_AUTOSAVE_MS;
use crate::domain::tags::suggest::DEFAULT_SUGGESTION_LIMIT;
use crate::error::{DumprError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::detect_default_editor")]
    pub editor: String,
    #[serde(default = "default_autosave_ms")]
    pub autosave_ms: u64,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    pub created: DateTime<Utc>,
}

fn default_autosave_ms() -> u64 {
    DEFAULT_AUTOSAVE_MS
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            autosave_ms: DEFAULT_AUTOSAVE_MS,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            created: Utc::now(),
        }
    }

    /// Load config from .dumpr/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".dumpr").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DumprError::NotDumprDirectory(path.to_path_buf())
            } else {
                DumprError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DumprError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .dumpr/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let dumpr_dir = path.join(".dumpr");
        let config_path = dumpr_dir.join("config.toml");

        // Ensure .dumpr directory exists
        if !dumpr_dir.exists() {
            fs::create_dir(&dumpr_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DumprError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Quiet period after the last keystroke before autosaving
    pub fn autosave_wait(&self) -> Duration {
        Duration::from_millis(self.autosave_ms)
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert!(!config.editor.is_empty());
        assert_eq!(config.autosave_ms, 450);
        assert_eq!(config.suggestion_limit, 8);
        assert_eq!(config.autosave_wait(), Duration::from_millis(450));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.autosave_ms = 900;

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".dumpr").exists());
        assert!(temp.path().join(".dumpr/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.editor, config.editor);
        assert_eq!(loaded.autosave_ms, 900);
        assert_eq!(loaded.suggestion_limit, 8);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_fills_missing_fields_with_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".dumpr")).unwrap();
        fs::write(
            temp.path().join(".dumpr/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.autosave_ms, 450);
        assert_eq!(loaded.suggestion_limit, 8);
        assert!(!loaded.editor.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            DumprError::NotDumprDirectory(_) => {}
            _ => panic!("Expected NotDumprDirectory error"),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".dumpr")).unwrap();
        fs::write(temp.path().join(".dumpr/config.toml"), "autosave_ms = \"soon\"").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            DumprError::Config(msg) => assert!(msg.contains("Failed to parse config.toml")),
            other => panic!("Expected Config error, got {other}"),
        }
    }

    #[test]
    fn test_get_editor_not_empty() {
        let config = Config {
            editor: "default-editor".to_string(),
            ..Config::new()
        };
        // Might return an env var if EDITOR or VISUAL is set in the test environment
        assert!(!config.get_editor().is_empty());
    }

    #[test]
    fn test_default_editor_detection() {
        let editor = Config::detect_default_editor();
        assert!(!editor.is_empty());

        let fallback = if cfg!(windows) { "notepad" } else { "nano" };
        assert!(
            editor == fallback
                || std::env::var("EDITOR").is_ok()
                || std::env::var("VISUAL").is_ok()
        );
    }
}
