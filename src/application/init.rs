//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new workspace at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Creates .dumpr and an empty entry store
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;
    info!(root = %path.display(), "initialized workspace");

    println!("Initialized dumpr workspace at {}", path.display());

    Ok(())
}
