//! Events emitted by the palette for the host editor to handle.

/// Palette lifecycle events.
///
/// The controller queues these instead of calling back into the host. Drain
/// them with [`PaletteController::take_events`](crate::PaletteController::take_events)
/// after each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// A session started at the given trigger offset.
    Opened {
        /// Absolute document offset of the `/` trigger character.
        anchor: usize,
        /// Text typed after the trigger at the moment of opening.
        query: String,
    },

    /// The filter query changed while the palette stayed open.
    QueryChanged {
        /// The new query.
        query: String,
        /// Number of commands matching it.
        matches: usize,
    },

    /// A command was applied and the typed trigger text removed.
    Committed {
        /// Title of the applied command.
        title: String,
    },

    /// The palette closed.
    Closed {
        /// Why the session ended.
        reason: CloseReason,
    },
}

/// Why a palette session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The selection became a non-empty range.
    RangeSelection,
    /// The trigger character was deleted.
    TriggerDeleted,
    /// The text before the caret no longer starts with the trigger.
    TriggerLost,
    /// A new trigger replaced the running session.
    Superseded,
    /// Escape was pressed.
    Escape,
    /// The user interacted outside the palette.
    OutsideInteraction,
    /// A command was committed.
    Committed,
    /// The document rejected the selected command.
    CommandFailed,
    /// The editor instance went away.
    Detached,
}
