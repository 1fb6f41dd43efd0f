//! Application configuration
//!
//! Configuration loaded from `.note-lander.toml`.

use note_slash_command::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from `.note-lander.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// UI language of the command palette ("en-US" or "de-DE")
    #[serde(default)]
    pub locale: Locale,

    /// Maximum number of command rows shown at once
    #[serde(default = "default_palette_max_rows")]
    pub palette_max_rows: usize,

    /// Directory new notes are saved in
    #[serde(default = "default_notes_dir")]
    pub notes_dir: PathBuf,

    /// Save the note when quitting
    #[serde(default = "default_autosave")]
    pub autosave: bool,
}

fn default_palette_max_rows() -> usize {
    8
}

fn default_notes_dir() -> PathBuf {
    crate::paths::default_notes_dir().unwrap_or_else(|e| {
        log::warn!("Falling back to ./notes: {}", e);
        PathBuf::from("notes")
    })
}

fn default_autosave() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            palette_max_rows: default_palette_max_rows(),
            notes_dir: default_notes_dir(),
            autosave: default_autosave(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse_or_default(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    fn parse_or_default(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.palette_max_rows, 8);
        assert!(config.autosave);
        assert!(!config.notes_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            locale = "de-DE"
            palette_max_rows = 5
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.locale, Locale::DeDe);
        assert_eq!(config.palette_max_rows, 5);
        // Other fields should use defaults
        assert!(config.autosave);
    }

    #[test]
    fn test_locale_alias() {
        let config: AppConfig = toml::from_str(r#"locale = "de""#).unwrap();
        assert_eq!(config.locale, Locale::DeDe);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = AppConfig::parse_or_default("palette_max_rows = \"many\"");
        assert_eq!(config, AppConfig::default());
    }
}
