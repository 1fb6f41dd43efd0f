//! Trait for the block-based rich-text document the palette works against.

use crate::model::EditorCommand;
use thiserror::Error;

/// Errors a document can report back to the palette.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The offset lies outside the document.
    #[error("Offset {offset} is outside the document (length {len})")]
    InvalidOffset { offset: usize, len: usize },

    /// The range is reversed or outside the document.
    #[error("Invalid range {from}..{to} (length {len})")]
    InvalidRange { from: usize, to: usize, len: usize },

    /// The offset is valid but not currently on screen.
    #[error("Offset {offset} is not visible")]
    Offscreen { offset: usize },

    /// The document refused to apply a command.
    #[error("Command rejected: {0}")]
    Rejected(String),
}

/// A terminal cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: u16,
    pub y: u16,
}

impl ScreenPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// The current selection as absolute document offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionInfo {
    /// Lower bound of the selection.
    pub from: usize,
    /// Upper bound of the selection.
    pub to: usize,
}

impl SelectionInfo {
    /// A collapsed selection at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            from: offset,
            to: offset,
        }
    }

    /// A selection spanning `from..to` (bounds are ordered).
    pub fn range(from: usize, to: usize) -> Self {
        Self {
            from: from.min(to),
            to: from.max(to),
        }
    }

    /// Check if the selection is a caret (empty range)
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// Everything the trigger detector looks at for one change event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentSnapshot {
    /// Text of the current block from its start up to the cursor.
    pub text_before: String,
    /// The current selection.
    pub selection: SelectionInfo,
    /// Absolute offset of the first character of the current block.
    pub line_start: usize,
}

impl DocumentSnapshot {
    /// Absolute cursor offset (the lower bound of the selection).
    pub fn cursor(&self) -> usize {
        self.selection.from
    }
}

/// The document model adapter.
///
/// All offsets are absolute character offsets into the document. The palette
/// only ever reads through this trait and only ever mutates through
/// [`apply_command`](DocumentModel::apply_command) and
/// [`delete_range`](DocumentModel::delete_range).
///
/// # Example
///
/// ```ignore
/// impl DocumentModel for MyEditor {
///     fn text_before_cursor(&self) -> String {
///         let (block, local) = self.locate(self.selection().from);
///         block.text().chars().take(local).collect()
///     }
///
///     fn apply_command(&mut self, command: &EditorCommand) -> Result<(), DocumentError> {
///         match command {
///             EditorCommand::ToggleBold => self.toggle_mark(Mark::Bold),
///             // ...
///         }
///     }
///
///     // ... other methods
/// }
/// ```
pub trait DocumentModel {
    /// Plain text of the current block up to the cursor.
    fn text_before_cursor(&self) -> String;

    /// The current selection.
    fn selection(&self) -> SelectionInfo;

    /// Absolute offset of the start of the block holding the cursor.
    fn line_start_offset(&self) -> usize;

    /// Largest valid offset in the document.
    fn content_len(&self) -> usize;

    /// Screen coordinates of a document offset.
    fn coordinates_at(&self, offset: usize) -> Result<ScreenPoint, DocumentError>;

    /// Top-left corner of the editing surface, used as last-resort anchor.
    fn viewport_origin(&self) -> ScreenPoint;

    /// Apply a command to the current selection.
    fn apply_command(&mut self, command: &EditorCommand) -> Result<(), DocumentError>;

    /// Delete the text in `from..to` as a single edit.
    fn delete_range(&mut self, from: usize, to: usize) -> Result<(), DocumentError>;

    /// Give input focus back to the editing surface.
    fn focus(&mut self);

    /// Absolute cursor offset.
    fn cursor_offset(&self) -> usize {
        self.selection().from
    }

    /// Check if `offset` resolves to a position in the document
    fn is_valid_offset(&self, offset: usize) -> bool {
        offset <= self.content_len()
    }

    /// Screen coordinates of the cursor.
    fn cursor_coordinates(&self) -> Result<ScreenPoint, DocumentError> {
        self.coordinates_at(self.cursor_offset())
    }

    /// Capture what the trigger detector needs in one go.
    fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            text_before: self.text_before_cursor(),
            selection: self.selection(),
            line_start: self.line_start_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_info() {
        assert!(SelectionInfo::caret(4).is_empty());
        let range = SelectionInfo::range(9, 3);
        assert_eq!(range.from, 3);
        assert_eq!(range.to, 9);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_snapshot_cursor() {
        let snapshot = DocumentSnapshot {
            text_before: "/h".to_string(),
            selection: SelectionInfo::caret(12),
            line_start: 10,
        };
        assert_eq!(snapshot.cursor(), 12);
    }

    #[test]
    fn test_document_error_messages() {
        let err = DocumentError::InvalidOffset { offset: 20, len: 5 };
        assert_eq!(
            err.to_string(),
            "Offset 20 is outside the document (length 5)"
        );
    }
}
