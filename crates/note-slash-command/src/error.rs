//! Palette errors
//!
//! None of these are fatal. The controller logs them and degrades to "palette
//! closes, document untouched beyond what was already committed".

use crate::traits::DocumentError;
use thiserror::Error;

/// Errors raised inside the palette.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaletteError {
    /// The trigger offset no longer resolves to a usable document position.
    #[error("Stale anchor: offset {anchor} is no longer valid (cursor at {cursor})")]
    StaleAnchor { anchor: usize, cursor: usize },

    /// Screen coordinates for the palette could not be computed.
    #[error("Failed to position palette: {0}")]
    Positioning(#[source] DocumentError),

    /// The document rejected the selected command.
    #[error("Command '{title}' failed: {source}")]
    CommandFailed {
        title: String,
        #[source]
        source: DocumentError,
    },

    /// Two registry entries share a title.
    #[error("Duplicate command title: {0}")]
    DuplicateTitle(String),
}
