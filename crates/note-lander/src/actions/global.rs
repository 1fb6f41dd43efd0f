//! Global actions - not tied to the editor or the palette

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use std::path::PathBuf;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// The event loop is about to start
    Start,
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Raw mouse event (before translation)
    Mouse(MouseEvent),
    /// The terminal window lost focus
    FocusLost,
    /// The terminal was resized
    Resize { width: u16, height: u16 },
    /// Write the note to disk
    Save,
    /// The note was written to the given path
    Saved(PathBuf),
    /// Writing the note failed
    SaveFailed(String),
    /// Quit the application
    Quit,
}
