use crate::actions::{Action, GlobalAction};
use crate::layout::editor_area;
use crate::reducers::{editor_reducer, palette_reducer};
use crate::state::AppState;
use note_slash_command::ScreenPoint;
use ratatui::layout::Rect;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(action) => reduce_global(state, action),
        Action::Editor(action) => editor_reducer::reduce_editor(state, action),
        Action::Palette(action) => palette_reducer::reduce_palette(state, action),
    }
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            // Closes an open palette without touching the note
            state.palettes.detach(state.editor.id);
            state.running = false;
        }
        GlobalAction::Resize { width, height } => {
            state.screen = Rect::new(0, 0, *width, *height);
            let area = editor_area(state.screen);
            state.editor.buffer.set_viewport(
                ScreenPoint::new(area.x, area.y),
                area.width,
                area.height,
            );
            if state.palette_open() {
                palette_reducer::notify_change(&mut state);
            }
        }
        GlobalAction::Saved(path) => {
            state.editor.buffer.mark_clean();
            state.status.info(format!("Saved to {}", path.display()));
        }
        GlobalAction::SaveFailed(message) => {
            state.status.error(format!("Save failed: {}", message));
        }
        // Input events are translated by the keyboard middleware, saving is
        // done by the persistence middleware
        GlobalAction::Start
        | GlobalAction::KeyPressed(_)
        | GlobalAction::Mouse(_)
        | GlobalAction::FocusLost
        | GlobalAction::Save => {}
    }
    state
}
