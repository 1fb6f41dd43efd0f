//! Palette keys
//!
//! The only keys the palette ever intercepts. The host editor maps its own key
//! events to these (or to nothing) and hands them to
//! [`PaletteController::handle_key`](crate::PaletteController::handle_key)
//! before its normal text handling runs. Every other key, printable or not,
//! stays with the editor.

use strum::{Display, EnumIter, EnumString};

/// Keys intercepted while the palette is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum PaletteKey {
    /// Highlight the previous command (wraps to the last one)
    #[strum(serialize = "ArrowUp", serialize = "Up")]
    ArrowUp,
    /// Highlight the next command (wraps to the first one)
    #[strum(serialize = "ArrowDown", serialize = "Down")]
    ArrowDown,
    /// Commit the highlighted command
    Enter,
    /// Commit the highlighted command
    Tab,
    /// Remove the typed trigger text and close without running a command
    #[strum(serialize = "Escape", serialize = "Esc")]
    Escape,
}

impl PaletteKey {
    /// Map a key name (`"ArrowUp"`, `"Enter"`, `"Esc"`, ...) to a palette key.
    ///
    /// Returns `None` for keys the palette never intercepts.
    pub fn from_key_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}
