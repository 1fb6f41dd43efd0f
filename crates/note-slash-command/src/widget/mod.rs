//! Ratatui widgets for the slash palette.

mod palette;
mod popup;

pub use palette::SlashPaletteWidget;
pub use popup::AnchoredPopup;
