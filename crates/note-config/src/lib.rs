//! Configuration and file management for note-lander
//!
//! This crate provides:
//! - File path utilities for config, cache and data files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Note persistence (JSON)
//! - Recently opened notes

pub mod app_config;
pub mod config_file;
pub mod notes;
pub mod paths;
pub mod recent_notes;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use notes::{load_note, note_path, save_note};
pub use recent_notes::{RecentNote, RecentNotes};
