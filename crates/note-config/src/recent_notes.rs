//! Recently opened notes
//!
//! Most recent first, at most [`MAX_RECENT_NOTES`] entries.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

pub const MAX_RECENT_NOTES: usize = 10;

/// A recently opened note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentNote {
    pub path: PathBuf,
    pub title: String,
    pub opened_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentNotes {
    #[serde(default)]
    notes: Vec<RecentNote>,
}

impl RecentNotes {
    /// Load from the default location
    ///
    /// Returns an empty list if the file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match paths::recent_notes_path() {
            Ok(path) if path.exists() => Self::load_from_path(&path).unwrap_or_else(|e| {
                log::warn!("Failed to load recent notes: {:#}", e);
                Self::default()
            }),
            _ => {
                log::debug!("No recent notes file found, starting fresh");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to_path(&paths::recent_notes_path()?)
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read recent notes file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse recent notes file: {:?}", path))
    }

    /// Save to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize recent notes")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write recent notes file: {:?}", path))?;
        log::info!("Saved {} recent notes to {:?}", self.notes.len(), path);
        Ok(())
    }

    /// Record that `path` was opened, moving it to the front
    pub fn touch(&mut self, path: impl Into<PathBuf>, title: impl Into<String>) {
        let path = path.into();
        self.notes.retain(|n| n.path != path);
        self.notes.insert(
            0,
            RecentNote {
                path,
                title: title.into(),
                opened_at: Utc::now(),
            },
        );
        self.notes.truncate(MAX_RECENT_NOTES);
    }

    pub fn notes(&self) -> &[RecentNote] {
        &self.notes
    }

    /// The most recently opened note
    pub fn latest(&self) -> Option<&RecentNote> {
        self.notes.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_touch_moves_to_front() {
        let mut recent = RecentNotes::default();
        recent.touch("a.json", "A");
        recent.touch("b.json", "B");
        recent.touch("a.json", "A again");

        let titles: Vec<&str> = recent.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["A again", "B"]);
        assert_eq!(recent.latest().map(|n| n.path.clone()), Some(PathBuf::from("a.json")));
    }

    #[test]
    fn test_capped() {
        let mut recent = RecentNotes::default();
        for i in 0..15 {
            recent.touch(format!("{}.json", i), format!("Note {}", i));
        }
        assert_eq!(recent.notes().len(), MAX_RECENT_NOTES);
        assert_eq!(recent.notes()[0].title, "Note 14");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent-notes.toml");
        let mut recent = RecentNotes::default();
        recent.touch("/tmp/x.json", "X");
        recent.save_to_path(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[[notes]]"));

        let loaded = RecentNotes::load_from_path(&path).unwrap();
        assert_eq!(loaded, recent);
    }
}
