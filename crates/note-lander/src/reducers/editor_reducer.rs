//! Editor Reducer
//!
//! Applies edits and caret motions to the buffer, then lets the slash palette
//! look at the result.

use crate::actions::EditorAction;
use crate::reducers::palette_reducer;
use crate::state::AppState;
use note_slash_command::ScreenPoint;

pub fn reduce_editor(mut state: AppState, action: &EditorAction) -> AppState {
    let buffer = &mut state.editor.buffer;
    match *action {
        EditorAction::InsertChar(c) => buffer.insert_char(c),
        EditorAction::Newline => buffer.split_block(),
        EditorAction::Backspace => buffer.backspace(),
        EditorAction::Delete => buffer.delete_forward(),
        EditorAction::MoveLeft { extend } => buffer.move_left(extend),
        EditorAction::MoveRight { extend } => buffer.move_right(extend),
        EditorAction::MoveUp => buffer.move_up(),
        EditorAction::MoveDown => buffer.move_down(),
        EditorAction::Home => buffer.move_home(),
        EditorAction::End => buffer.move_end(),
        EditorAction::ClickAt { column, row } => {
            if !buffer.set_cursor_from_point(ScreenPoint::new(column, row)) {
                log::trace!("Click at {},{} outside the text", column, row);
            }
        }
    }

    if action.is_edit() {
        state.status.clear();
    }

    palette_reducer::notify_change(&mut state);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;
    use pretty_assertions::assert_eq;

    fn apply(state: AppState, actions: &[EditorAction]) -> AppState {
        actions.iter().fold(state, reduce_editor)
    }

    #[test]
    fn test_typing_slash_opens_palette() {
        let state = apply(
            test_state("intro\n"),
            &[EditorAction::InsertChar('/'), EditorAction::InsertChar('b')],
        );
        assert!(state.palette_open());
        assert_eq!(state.palette().map(|p| p.query().to_string()), Some("b".to_string()));
        assert_eq!(state.palette().and_then(|p| p.anchor()), Some(6));
    }

    #[test]
    fn test_slash_mid_line_is_text() {
        let state = apply(test_state("a"), &[EditorAction::InsertChar('/')]);
        assert!(!state.palette_open());
        assert_eq!(state.editor.buffer.note().plain_text(), "a/");
    }

    #[test]
    fn test_backspace_over_trigger_closes() {
        let state = apply(
            test_state(""),
            &[EditorAction::InsertChar('/'), EditorAction::Backspace],
        );
        assert!(!state.palette_open());
        assert_eq!(state.editor.buffer.note().plain_text(), "");
    }

    #[test]
    fn test_shift_selection_closes() {
        let state = apply(
            test_state(""),
            &[
                EditorAction::InsertChar('/'),
                EditorAction::InsertChar('q'),
                EditorAction::MoveLeft { extend: true },
            ],
        );
        assert!(!state.palette_open());
        // text stays when the selection closes the palette
        assert_eq!(state.editor.buffer.note().plain_text(), "/q");
    }

    #[test]
    fn test_edit_clears_status() {
        let mut state = test_state("");
        state.status.info("Saved");
        let state = apply(state, &[EditorAction::MoveLeft { extend: false }]);
        assert!(state.status.message.is_some());
        let state = apply(state, &[EditorAction::InsertChar('x')]);
        assert_eq!(state.status.message, None);
    }
}
