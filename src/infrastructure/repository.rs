//! Workspace discovery and file layout

use crate::error::{DumprError, Result};
use crate::infrastructure::{Config, JsonFileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory marking a workspace root
pub const DUMPR_DIR: &str = ".dumpr";

/// Abstract repository for workspace operations
pub trait WorkspaceRepository {
    /// Load configuration from .dumpr/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .dumpr/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .dumpr directory exists
    fn is_initialized(&self) -> bool;

    /// Create .dumpr directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WorkspaceRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks DUMPR_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DUMPR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_dumpr_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DumprError::Config(format!(
                    "DUMPR_ROOT is set to '{}' but no .dumpr directory found. \
                    Run 'dumpr init' in that directory or unset DUMPR_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_dumpr_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(DumprError::NotDumprDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_dumpr_dir(path: &Path) -> bool {
        path.join(DUMPR_DIR).is_dir()
    }

    /// Entry store for this workspace
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.root.join(DUMPR_DIR).join("entries.json"))
    }

    /// Scratch file the external editor works on for one entry
    pub fn edit_buffer_path(&self, id: &str) -> PathBuf {
        self.root
            .join(DUMPR_DIR)
            .join("edit")
            .join(format!("{}.md", id))
    }
}

impl WorkspaceRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_dumpr_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let dumpr_dir = self.root.join(DUMPR_DIR);

        if dumpr_dir.exists() {
            return Err(DumprError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&dumpr_dir)?;
        self.store().initialize()
    }
}
