//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application data directory (~/.lifetrack/).

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::storage("Could not determine home directory"))
}

/// Get the LifeTrack directory (~/.lifetrack/)
pub fn lifetrack_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".lifetrack"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the LifeTrack directory, creating if it doesn't exist
pub fn ensure_lifetrack_dir() -> AppResult<PathBuf> {
    let path = lifetrack_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
