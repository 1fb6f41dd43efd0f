//! Trait for providing theme colors to the palette widget.

use ratatui::style::Color;

/// Provides colors for the slash palette.
///
/// Implement this to integrate the palette with your application's theme.
pub trait PaletteTheme: Send + Sync {
    /// Background of the palette panel.
    fn panel_background(&self) -> Color {
        Color::Rgb(30, 30, 40)
    }

    /// Border of the palette panel.
    fn panel_border(&self) -> Color {
        Color::DarkGray
    }

    /// Panel title.
    fn panel_title(&self) -> Color {
        Color::Cyan
    }

    /// Regular command rows.
    fn item_foreground(&self) -> Color {
        Color::White
    }

    /// Background of the highlighted row.
    fn selected_background(&self) -> Color {
        Color::Rgb(50, 50, 80)
    }

    /// Foreground of the highlighted row.
    fn selected_foreground(&self) -> Color {
        Color::Yellow
    }

    /// Shortcut hints and placeholder text.
    fn muted_foreground(&self) -> Color {
        Color::DarkGray
    }
}

/// Default theme with sensible dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl PaletteTheme for DefaultTheme {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = DefaultTheme;
        assert_eq!(theme.selected_foreground(), Color::Yellow);
        assert_eq!(theme.panel_border(), Color::DarkGray);
    }
}
