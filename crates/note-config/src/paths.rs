//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/note-lander/`, `~/.cache/note-lander/`, `~/.local/share/note-lander/`
//! - macOS: `~/Library/Application Support/note-lander/`, `~/Library/Caches/note-lander/`
//! - Windows: `%APPDATA%\note-lander\`, `%LOCALAPPDATA%\note-lander\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "note-lander";

/// Get the application config directory
/// Returns ~/.config/note-lander/ on Linux, ~/Library/Application Support/note-lander/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory (log files)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application data directory
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default directory notes are stored in
pub fn default_notes_dir() -> Result<PathBuf> {
    let dir = data_dir()?.join("notes");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get path to recent notes file
pub fn recent_notes_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("recent-notes.toml"))
}
