//! Editor Widget
//!
//! One row per block: the block marker followed by the styled text.

use note_document::{BlockKind, EditorBuffer, MarkSet};
use note_slash_command::DocumentModel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

pub struct EditorWidget<'a> {
    buffer: &'a EditorBuffer,
}

impl<'a> EditorWidget<'a> {
    pub fn new(buffer: &'a EditorBuffer) -> Self {
        Self { buffer }
    }
}

fn kind_style(kind: BlockKind) -> Style {
    match kind {
        BlockKind::Heading(1) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        BlockKind::Heading(_) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        BlockKind::Blockquote => Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        BlockKind::CodeBlock => Style::default().fg(Color::Green).bg(Color::Rgb(30, 30, 30)),
        BlockKind::HorizontalRule => Style::default().fg(Color::DarkGray),
        BlockKind::Paragraph | BlockKind::BulletItem | BlockKind::OrderedItem => Style::default(),
    }
}

fn mark_modifier(marks: MarkSet) -> Modifier {
    let mut modifier = Modifier::empty();
    if marks.contains(MarkSet::BOLD) {
        modifier |= Modifier::BOLD;
    }
    if marks.contains(MarkSet::ITALIC) {
        modifier |= Modifier::ITALIC;
    }
    if marks.contains(MarkSet::STRIKE) {
        modifier |= Modifier::CROSSED_OUT;
    }
    modifier
}

impl Widget for EditorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let note = self.buffer.note();
        let selection = self.buffer.selection();
        let scroll = self.buffer.viewport().scroll;

        for index in self.buffer.visible_blocks() {
            let y = area.y + (index - scroll) as u16;
            if y >= area.bottom() {
                break;
            }
            let block = &note.blocks[index];
            let base = kind_style(block.kind);

            if block.kind == BlockKind::HorizontalRule {
                buf.set_string(area.x, y, "─".repeat(area.width as usize), base);
                continue;
            }

            let prefix = self.buffer.block_prefix(index);
            let (mut x, _) = buf.set_stringn(
                area.x,
                y,
                &prefix,
                area.width as usize,
                Style::default().fg(Color::DarkGray),
            );

            let start = note.block_start(index);
            for (col, c) in block.text.chars().enumerate() {
                if x >= area.right() {
                    break;
                }
                let offset = start + col;
                let mut style = base.add_modifier(mark_modifier(block.mark_at(col)));
                if offset >= selection.from && offset < selection.to {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                buf[(x, y)].set_char(c).set_style(style);
                x += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use note_slash_command::{EditorCommand, ScreenPoint};
    use pretty_assertions::assert_eq;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn render(buffer: &EditorBuffer) -> Buffer {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        EditorWidget::new(buffer).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_prefixes() {
        let mut buffer = EditorBuffer::from_plain_text("Title\nitem\n");
        buffer.set_viewport(ScreenPoint::new(0, 0), 20, 4);
        buffer.set_cursor(0);
        buffer.apply_command(&EditorCommand::ToggleHeading { level: 1 }).unwrap();
        buffer.set_cursor(6);
        buffer.apply_command(&EditorCommand::ToggleBulletList).unwrap();

        let buf = render(&buffer);
        assert_eq!(row(&buf, 0), "# Title");
        assert_eq!(row(&buf, 1), "• item");
        assert_eq!(row(&buf, 2), "");
        assert!(buf[(2, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_selection_is_reversed() {
        let mut buffer = EditorBuffer::from_plain_text("abc");
        buffer.set_selection(1, 2);
        let buf = render(&buffer);
        assert!(!buf[(0, 0)].modifier.contains(Modifier::REVERSED));
        assert!(buf[(1, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(2, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_marks() {
        let mut buffer = EditorBuffer::from_plain_text("ab");
        buffer.set_selection(0, 1);
        buffer.apply_command(&EditorCommand::ToggleStrike).unwrap();
        let buf = render(&buffer);
        assert!(buf[(0, 0)].modifier.contains(Modifier::CROSSED_OUT));
        assert!(!buf[(1, 0)].modifier.contains(Modifier::CROSSED_OUT));
    }
}
