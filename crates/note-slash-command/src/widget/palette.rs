//! Slash palette widget.

use crate::model::{IconRef, PaletteDictionary};
use crate::state::PaletteView;
use crate::traits::PaletteTheme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Widget};

const MIN_WIDTH: u16 = 28;
const ICON_WIDTH: u16 = 3;

/// Renders an open palette from a [`PaletteView`].
///
/// Layout inside the border: one line with the typed query (or the
/// placeholder hint), then the command rows or the "no options" text.
pub struct SlashPaletteWidget<'a, T: PaletteTheme> {
    view: &'a PaletteView,
    dictionary: &'static PaletteDictionary,
    theme: &'a T,
}

impl<'a, T: PaletteTheme> SlashPaletteWidget<'a, T> {
    pub fn new(view: &'a PaletteView, dictionary: &'static PaletteDictionary, theme: &'a T) -> Self {
        Self {
            view,
            dictionary,
            theme,
        }
    }

    /// Width and height the widget wants for `view`, borders included.
    pub fn preferred_size(view: &PaletteView, dictionary: &PaletteDictionary) -> (u16, u16) {
        let widest_row = view
            .rows
            .iter()
            .map(|row| {
                let hint = row.shortcut_hint.as_deref().map_or(0, |h| h.chars().count() + 2);
                ICON_WIDTH as usize + row.title.chars().count() + hint
            })
            .max()
            .unwrap_or(0);
        let chrome = [
            dictionary.title.chars().count() + 2,
            dictionary.placeholder.chars().count(),
            dictionary.no_results.chars().count(),
            view.query.chars().count() + 1,
        ]
        .into_iter()
        .max()
        .unwrap_or(0);

        let inner_width = u16::try_from(widest_row.max(chrome).saturating_add(2)).unwrap_or(u16::MAX);
        let body_rows = u16::try_from(view.rows.len().max(1)).unwrap_or(u16::MAX);
        (
            inner_width.max(MIN_WIDTH).saturating_add(2),
            body_rows.saturating_add(3),
        )
    }

    /// List index of the row drawn at terminal cell (`column`, `row`) when
    /// the widget was rendered into `area`.
    pub fn row_at(area: Rect, view: &PaletteView, column: u16, row: u16) -> Option<usize> {
        let inner = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        let list_top = inner.y.saturating_add(1);
        if column < inner.x || column >= inner.right() || row < list_top || row >= inner.bottom() {
            return None;
        }
        let offset = (row - list_top) as usize;
        (offset < view.rows.len()).then_some(view.first_visible + offset)
    }
}

/// Short glyph for a command icon.
fn icon_glyph(icon: IconRef) -> &'static str {
    match icon.name() {
        "Heading1" => "H1",
        "Heading2" => "H2",
        "Heading3" => "H3",
        "Pilcrow" => "¶",
        "List" => "•",
        "ListOrdered" => "1.",
        "Quote" => "\"",
        "Minus" => "─",
        "Code" => "<>",
        "Bold" => "B",
        "Italic" => "I",
        "Strikethrough" => "S",
        _ => "·",
    }
}

impl<T: PaletteTheme> Widget for SlashPaletteWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        // Clear the area behind the popup
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border()))
            .style(Style::default().bg(self.theme.panel_background()))
            .title(Span::styled(
                format!(" {} ", self.dictionary.title),
                Style::default()
                    .fg(self.theme.panel_title())
                    .add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        block.render(area, buf);

        let muted = Style::default().fg(self.theme.muted_foreground());

        // Query line
        if self.view.show_placeholder {
            buf.set_stringn(inner.x, inner.y, self.dictionary.placeholder, inner.width as usize, muted);
        } else {
            let query = format!("/{}", self.view.query);
            buf.set_stringn(
                inner.x,
                inner.y,
                &query,
                inner.width as usize,
                Style::default().fg(self.theme.item_foreground()),
            );
        }

        if inner.height < 2 {
            return;
        }

        if self.view.no_results {
            buf.set_stringn(inner.x, inner.y + 1, self.dictionary.no_results, inner.width as usize, muted);
            return;
        }

        let max_rows = (inner.height - 1) as usize;
        for (i, row) in self.view.rows.iter().take(max_rows).enumerate() {
            let y = inner.y + 1 + i as u16;
            let style = if row.is_selected {
                Style::default()
                    .fg(self.theme.selected_foreground())
                    .bg(self.theme.selected_background())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.item_foreground())
            };

            if row.is_selected {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
            }

            let label = format!("{:<width$}{}", icon_glyph(row.icon), row.title, width = ICON_WIDTH as usize);
            buf.set_stringn(inner.x, y, &label, inner.width as usize, style);

            if let Some(hint) = &row.shortcut_hint {
                let hint_width = hint.chars().count() as u16;
                let label_width = label.chars().count() as u16;
                if label_width + hint_width + 1 < inner.width {
                    let hint_style = if row.is_selected { style } else { muted };
                    buf.set_string(inner.right() - hint_width, y, hint, hint_style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Locale;
    use crate::state::PaletteRow;
    use crate::traits::DefaultTheme;

    fn view() -> PaletteView {
        PaletteView {
            query: "h".to_string(),
            rows: vec![
                PaletteRow {
                    title: "Heading 1".to_string(),
                    icon: IconRef("Heading1"),
                    shortcut_hint: Some("#".to_string()),
                    is_selected: true,
                },
                PaletteRow {
                    title: "Heading 2".to_string(),
                    icon: IconRef("Heading2"),
                    shortcut_hint: Some("##".to_string()),
                    is_selected: false,
                },
            ],
            total_matches: 2,
            first_visible: 0,
            show_placeholder: false,
            no_results: false,
        }
    }

    fn render_to_lines(view: &PaletteView, area: Rect) -> Vec<String> {
        let mut buf = Buffer::empty(area);
        let theme = DefaultTheme;
        SlashPaletteWidget::new(view, Locale::EnUs.palette(), &theme).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_renders_query_and_rows() {
        let view = view();
        let lines = render_to_lines(&view, Rect::new(0, 0, 30, 5));
        assert!(lines[0].contains("Commands"));
        assert!(lines[1].contains("/h"));
        assert!(lines[2].contains("H1 Heading 1"));
        assert!(lines[2].trim_end_matches('│').trim_end().ends_with('#'));
        assert!(lines[3].contains("Heading 2"));
    }

    #[test]
    fn test_renders_placeholder_and_no_results() {
        let view = PaletteView {
            show_placeholder: true,
            no_results: true,
            ..Default::default()
        };
        let lines = render_to_lines(&view, Rect::new(0, 0, 36, 4));
        assert!(lines[1].contains("Type to filter commands..."));
        assert!(lines[2].contains("No options found"));
    }

    #[test]
    fn test_preferred_size() {
        let view = view();
        let (width, height) = SlashPaletteWidget::<DefaultTheme>::preferred_size(&view, Locale::EnUs.palette());
        assert_eq!(height, 5);
        assert!(width >= MIN_WIDTH + 2);
    }

    #[test]
    fn test_preferred_size_with_huge_query() {
        let view = PaletteView {
            query: "x".repeat(70_000),
            ..view()
        };
        let (width, height) = SlashPaletteWidget::<DefaultTheme>::preferred_size(&view, Locale::EnUs.palette());
        assert_eq!(width, u16::MAX);
        assert_eq!(height, 5);
    }

    #[test]
    fn test_row_at() {
        let view = PaletteView {
            first_visible: 4,
            ..view()
        };
        let area = Rect::new(10, 5, 30, 5);
        assert_eq!(SlashPaletteWidget::<DefaultTheme>::row_at(area, &view, 12, 7), Some(4));
        assert_eq!(SlashPaletteWidget::<DefaultTheme>::row_at(area, &view, 12, 8), Some(5));
        // query line and border
        assert_eq!(SlashPaletteWidget::<DefaultTheme>::row_at(area, &view, 12, 6), None);
        assert_eq!(SlashPaletteWidget::<DefaultTheme>::row_at(area, &view, 10, 7), None);
    }
}
