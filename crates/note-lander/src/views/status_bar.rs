//! Status Bar Widget
//!
//! Format: ` note title*  message                      ^S save  ^Q quit `

use crate::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

const HINTS: &str = "^S save  ^Q quit";

pub struct StatusBarWidget<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let bg = Style::default().bg(Color::Rgb(40, 40, 50)).fg(Color::White);
        buf.set_style(area, bg);

        let buffer = &self.state.editor.buffer;
        let dirty = if buffer.is_dirty() { "*" } else { "" };
        let title = format!(" {}{} ", buffer.note().title, dirty);
        let (mut x, _) = buf.set_stringn(
            area.x,
            area.y,
            &title,
            area.width as usize,
            bg.add_modifier(Modifier::BOLD),
        );

        let hints_width = HINTS.chars().count() as u16 + 1;
        let hints_x = area.right().saturating_sub(hints_width);
        if hints_x > x {
            buf.set_string(hints_x, area.y, HINTS, bg.fg(Color::DarkGray));
        }

        if let Some(message) = &self.state.status.message {
            x += 1;
            let available = hints_x.saturating_sub(x + 1) as usize;
            let style = if self.state.status.is_error {
                bg.fg(Color::Red)
            } else {
                bg.fg(Color::Green)
            };
            buf.set_stringn(x, area.y, message, available, style);
        }
    }
}
