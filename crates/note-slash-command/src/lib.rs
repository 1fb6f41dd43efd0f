//! # note-slash-command
//!
//! The slash-command palette of the note editor: typing `/` at the start of a
//! line opens a contextual command menu that filters as the user keeps typing,
//! intercepts a handful of navigation keys, and cleans itself up on every exit
//! path.
//!
//! ## Design Principles
//!
//! This crate is **instrumented**. It never owns the document or the screen:
//!
//! - the host editor implements [`DocumentModel`] so the palette can read the
//!   text before the caret and request mutations,
//! - the host rendering surface implements [`Positioner`] so the palette can
//!   show, move and hide its menu,
//! - lifecycle changes are reported as [`PaletteEvent`]s the host drains.
//!
//! Everything runs synchronously on the caller's thread; there is nothing to
//! cancel besides closing the palette.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use note_slash_command::{AnchoredPopup, CommandRegistry, Locale, PaletteController, PaletteKey};
//!
//! let registry = CommandRegistry::for_locale(Locale::EnUs);
//! let mut palette = PaletteController::new(registry, AnchoredPopup::default());
//!
//! // After every content or selection change of the editor:
//! palette.handle_document_change(&buffer);
//!
//! // From the editor's key pipeline, before normal text handling:
//! if let Some(key) = PaletteKey::from_key_name("Enter") {
//!     if palette.handle_key(key, &mut buffer) {
//!         return; // consumed by the palette
//!     }
//! }
//!
//! for event in palette.take_events() {
//!     // Opened / QueryChanged / Committed / Closed
//! }
//! ```

pub mod action;
pub mod error;
pub mod event;
pub mod model;
pub mod state;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use action::PaletteKey;
pub use error::PaletteError;
pub use event::{CloseReason, PaletteEvent};
pub use model::{
    filter_commands, Command, CommandDictionary, CommandRegistry, EditorCommand, FilteredList,
    IconRef, Locale, PaletteDictionary,
};
pub use state::{
    detect, EditorId, PaletteController, PaletteRow, PaletteSessions, PaletteView,
    SelectionIndex, TeardownCause, TriggerDecision, TriggerState, TRIGGER_CHAR,
};
pub use traits::{
    AnchorRect, DefaultTheme, DocumentError, DocumentModel, DocumentSnapshot, NoOpPositioner,
    PaletteTheme, Positioner, ScreenPoint, SelectionInfo,
};
pub use widget::{AnchoredPopup, SlashPaletteWidget};
