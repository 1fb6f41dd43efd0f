//! Screen layout shared by the views and the input middleware

use crate::state::AppState;
use note_slash_command::{DefaultTheme, PaletteView, SlashPaletteWidget};
use ratatui::layout::Rect;

/// Everything above the status bar
pub fn editor_area(screen: Rect) -> Rect {
    Rect::new(
        screen.x,
        screen.y,
        screen.width,
        screen.height.saturating_sub(1),
    )
}

/// Bottom row
pub fn status_area(screen: Rect) -> Rect {
    Rect::new(
        screen.x,
        screen.bottom().saturating_sub(1),
        screen.width,
        screen.height.min(1),
    )
}

/// Where the open palette is drawn, and what it shows
pub fn palette_layout(state: &AppState) -> Option<(Rect, PaletteView)> {
    let palette = state.palette()?;
    let view = palette.view(state.config.palette_max_rows)?;
    let (width, height) =
        SlashPaletteWidget::<DefaultTheme>::preferred_size(&view, state.config.locale.palette());
    let area = palette
        .positioner()
        .popup_area(width, height, editor_area(state.screen))?;
    Some((area, view))
}
