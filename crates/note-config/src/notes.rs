//! Note persistence
//!
//! Notes are stored one per file as pretty-printed JSON.

use anyhow::{Context, Result};
use note_document::Note;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file for `note` inside `dir`
pub fn note_path(dir: &Path, note: &Note) -> PathBuf {
    dir.join(format!("{}.json", note.id))
}

/// Load a note from a JSON file
pub fn load_note(path: &Path) -> Result<Note> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read note file: {:?}", path))?;
    let mut note: Note = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse note file: {:?}", path))?;
    note.normalize();
    log::info!("Loaded note '{}' from {:?}", note.title, path);
    Ok(note)
}

/// Save a note as JSON, creating parent directories as needed
pub fn save_note(path: &Path, note: &Note) -> Result<()> {
    let content = serde_json::to_string_pretty(note).context("Failed to serialize note")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write note file: {:?}", path))?;

    log::info!("Saved note '{}' to {:?}", note.title, path);
    Ok(())
}
