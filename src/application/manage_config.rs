//! Config management use case

use crate::error::{DumprError, Result};
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};

/// Keys accepted by `config get`
pub const CONFIG_KEYS: &str = "editor, autosave_ms, suggestion_limit, created";

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            "autosave_ms" => Ok(config.autosave_ms.to_string()),
            "suggestion_limit" => Ok(config.suggestion_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DumprError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, CONFIG_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "autosave_ms" => {
                config.autosave_ms = parse_number(key, value)?;
            }
            "suggestion_limit" => {
                config.suggestion_limit = parse_number(key, value)?;
            }
            "created" => {
                return Err(DumprError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DumprError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor, autosave_ms, suggestion_limit",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        DumprError::Config(format!(
            "Invalid value for '{}': '{}' (expected a non-negative number)",
            key, value
        ))
    })
}
