//! Slash palette overlay

use crate::layout::palette_layout;
use crate::state::AppState;
use note_slash_command::{DefaultTheme, SlashPaletteWidget};
use ratatui::Frame;

/// Draw the palette next to its trigger, if a session is running
pub fn render(state: &AppState, frame: &mut Frame) {
    let Some((area, view)) = palette_layout(state) else {
        return;
    };
    let theme = DefaultTheme;
    let widget = SlashPaletteWidget::new(&view, state.config.locale.palette(), &theme);
    frame.render_widget(widget, area);
}
