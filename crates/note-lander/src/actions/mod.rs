//! Actions module
//!
//! Actions are tagged by domain:
//! - Global actions that affect the entire application (input events, save, quit)
//! - Editor actions that edit the note buffer
//! - Palette actions, produced only while the slash palette is open

pub mod editor;
pub mod global;
pub mod palette;

pub use editor::EditorAction;
pub use global::GlobalAction;
pub use palette::PaletteAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Text editing in the note buffer
    Editor(EditorAction),
    /// Slash palette interaction
    Palette(PaletteAction),
}
