//! Palette session state: trigger detection, highlighted command, lifecycle.

mod controller;
mod selection;
mod sessions;
mod trigger;
mod view;

pub use controller::PaletteController;
pub use selection::SelectionIndex;
pub use sessions::{EditorId, PaletteSessions};
pub use trigger::{detect, TeardownCause, TriggerDecision, TriggerState, TRIGGER_CHAR};
pub use view::{PaletteRow, PaletteView};
