//! Editor actions - edits and caret motions in the note buffer

use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EditorAction {
    InsertChar(char),
    Newline,
    Backspace,
    Delete,
    MoveLeft { extend: bool },
    MoveRight { extend: bool },
    MoveUp,
    MoveDown,
    Home,
    End,
    /// Left click at a terminal cell
    ClickAt { column: u16, row: u16 },
}

impl EditorAction {
    /// Check if this action changes the note content
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            EditorAction::InsertChar(_)
                | EditorAction::Newline
                | EditorAction::Backspace
                | EditorAction::Delete
        )
    }
}
