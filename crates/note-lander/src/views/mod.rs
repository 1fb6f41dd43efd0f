use crate::layout::{editor_area, status_area};
use crate::state::AppState;
use note_slash_command::DocumentModel;
use ratatui::{layout::Position, Frame};

pub mod editor_view;
pub mod palette_view;
pub mod status_bar;

pub use editor_view::EditorWidget;
pub use status_bar::StatusBarWidget;

/// Render the whole screen: note, status bar, and the palette on top
pub fn render(state: &AppState, frame: &mut Frame) {
    let screen = frame.area();
    frame.render_widget(EditorWidget::new(&state.editor.buffer), editor_area(screen));
    frame.render_widget(StatusBarWidget::new(state), status_area(screen));
    palette_view::render(state, frame);

    if let Ok(point) = state.editor.buffer.cursor_coordinates() {
        frame.set_cursor_position(Position::new(point.x, point.y));
    }
}
