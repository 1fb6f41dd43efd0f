//! Palette Reducer
//!
//! Forwards palette actions to the editor's controller and turns the events it
//! queued into status bar messages.

use crate::actions::{PaletteAction, PaletteAction::*};
use crate::state::AppState;
use note_slash_command::{CloseReason, PaletteEvent, ScreenPoint};
use std::ops::Range;

pub fn reduce_palette(mut state: AppState, action: &PaletteAction) -> AppState {
    let AppState {
        editor, palettes, ..
    } = &mut state;

    let Some(palette) = palettes.get_mut(editor.id) else {
        log::warn!("No palette attached to editor {}", editor.id);
        return state;
    };

    let consumed = match *action {
        Key(key) => palette.handle_key(key, &mut editor.buffer),
        SelectRow(index) => palette.select_index(index, &mut editor.buffer),
        OutsideInteraction => palette.handle_outside_interaction(&mut editor.buffer),
        ClickOutside { column, row } => {
            // Resolve the click against the text as drawn, before the
            // trigger text disappears
            let target = editor.buffer.offset_at_point(ScreenPoint::new(column, row));
            let removed = palette
                .anchor()
                .map(|anchor| anchor..editor.buffer.cursor())
                .filter(|range| !range.is_empty());
            let consumed = palette.handle_outside_interaction(&mut editor.buffer);
            if let Some(offset) = target {
                editor.buffer.set_cursor(shift_past_removed(offset, removed));
            }
            consumed
        }
    };
    if !consumed {
        log::debug!("Palette ignored {:?}", action);
    }

    if matches!(action, ClickOutside { .. }) {
        // The caret moved, like any other click
        notify_change(&mut state);
    } else {
        // No trigger detection here: a failed command keeps the typed text
        // and must not reopen the palette until the next edit
        report_events(&mut state);
    }
    state
}

/// Where `offset` ends up once `removed` was deleted from the document
fn shift_past_removed(offset: usize, removed: Option<Range<usize>>) -> usize {
    match removed {
        Some(range) if offset >= range.end => offset - range.len(),
        Some(range) if offset > range.start => range.start,
        _ => offset,
    }
}

/// Run trigger detection on the current buffer and report what happened.
pub fn notify_change(state: &mut AppState) {
    if let Some(palette) = state.palettes.get_mut(state.editor.id) {
        palette.handle_document_change(&state.editor.buffer);
    }
    report_events(state);
}

fn report_events(state: &mut AppState) {
    let AppState {
        editor,
        palettes,
        status,
        ..
    } = state;

    let Some(palette) = palettes.get_mut(editor.id) else {
        return;
    };

    for event in palette.take_events() {
        log::debug!("Palette event: {:?}", event);
        match event {
            PaletteEvent::Committed { title } => status.info(format!("Applied {}", title)),
            PaletteEvent::Closed {
                reason: CloseReason::CommandFailed,
            } => status.error("Command failed, text kept"),
            PaletteEvent::Opened { .. }
            | PaletteEvent::QueryChanged { .. }
            | PaletteEvent::Closed { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::EditorAction;
    use crate::reducers::app_reducer::reduce;
    use crate::state::tests::test_state;
    use note_slash_command::PaletteKey;
    use pretty_assertions::assert_eq;

    fn typed(text: &str, keys: &str) -> AppState {
        keys.chars().fold(test_state(text), |state, c| {
            reduce(state, &crate::actions::Action::Editor(EditorAction::InsertChar(c)))
        })
    }

    #[test]
    fn test_enter_commits_highlighted_command() {
        let state = typed("", "/bold");
        let state = reduce_palette(state, &Key(PaletteKey::Enter));
        assert!(!state.palette_open());
        assert_eq!(state.editor.buffer.note().plain_text(), "");
        assert_eq!(state.status.message.as_deref(), Some("Applied Bold"));
    }

    #[test]
    fn test_escape_removes_trigger_text() {
        let state = typed("keep\n", "/qu");
        let state = reduce_palette(state, &Key(PaletteKey::Escape));
        assert!(!state.palette_open());
        assert_eq!(state.editor.buffer.note().plain_text(), "keep\n");
        assert_eq!(state.status.message, None);
    }

    #[test]
    fn test_select_row() {
        let state = typed("", "/");
        let title = state
            .palette()
            .and_then(|p| p.filtered().get(1))
            .map(|c| c.title.clone());
        let state = reduce_palette(state, &SelectRow(1));
        assert!(!state.palette_open());
        assert_eq!(
            state.status.message,
            title.map(|t| format!("Applied {}", t))
        );
    }

    #[test]
    fn test_outside_interaction() {
        let state = typed("", "/x");
        let state = reduce_palette(state, &OutsideInteraction);
        assert!(!state.palette_open());
        assert_eq!(state.editor.buffer.note().plain_text(), "");
    }

    #[test]
    fn test_click_outside_lands_on_clicked_character() {
        let mut state = test_state("intro\nabc");
        state.editor.buffer.set_cursor(6);
        let state = "/qu".chars().fold(state, |state, c| {
            reduce(state, &crate::actions::Action::Editor(EditorAction::InsertChar(c)))
        });
        assert!(state.palette_open());

        // the 'c' of "/quabc" on the second row
        let state = reduce_palette(state, &ClickOutside { column: 5, row: 1 });
        assert!(!state.palette_open());
        assert_eq!(state.editor.buffer.note().plain_text(), "intro\nabc");
        assert_eq!(state.editor.buffer.cursor(), 8);
    }

    #[test]
    fn test_click_outside_before_trigger() {
        let state = typed("intro\n", "/qu");
        let state = reduce_palette(state, &ClickOutside { column: 2, row: 0 });
        assert!(!state.palette_open());
        assert_eq!(state.editor.buffer.note().plain_text(), "intro\n");
        assert_eq!(state.editor.buffer.cursor(), 2);
    }

    #[test]
    fn test_shift_past_removed() {
        assert_eq!(shift_past_removed(2, Some(6..9)), 2);
        assert_eq!(shift_past_removed(7, Some(6..9)), 6);
        assert_eq!(shift_past_removed(11, Some(6..9)), 8);
        assert_eq!(shift_past_removed(11, None), 11);
    }

    #[test]
    fn test_failed_command_reports_error() {
        let mut state = typed("", "/h1");
        state.editor.buffer.set_read_only(true);
        let state = reduce_palette(state, &Key(PaletteKey::Enter));
        assert!(!state.palette_open());
        assert!(state.status.is_error);
        assert_eq!(state.editor.buffer.note().plain_text(), "/h1");
    }

    #[test]
    fn test_edit_after_failed_command_reopens() {
        let mut state = typed("", "/h1");
        state.editor.buffer.set_read_only(true);
        let mut state = reduce_palette(state, &Key(PaletteKey::Enter));
        state.editor.buffer.set_read_only(false);
        let state = reduce(state, &crate::actions::Action::Editor(EditorAction::End));
        assert!(state.palette_open());
        assert_eq!(state.palette().map(|p| p.query().to_string()), Some("h1".to_string()));
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let state = test_state("abc");
        let state = reduce_palette(state, &Key(PaletteKey::Enter));
        assert_eq!(state.editor.buffer.note().plain_text(), "abc");
    }
}
