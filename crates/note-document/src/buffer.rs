//! Editor buffer
//!
//! A note plus everything needed to edit it in a terminal: the selection, the
//! marks the next typed character gets, focus, and the viewport the blocks are
//! laid out in (one screen row per block, no wrapping).
//!
//! Offsets are absolute character offsets: block *i* starts at the sum of
//! `len + 1` over all blocks before it.

use crate::block::{Block, BlockKind, MarkSet};
use crate::note::Note;
use note_slash_command::{DocumentError, DocumentModel, EditorCommand, ScreenPoint, SelectionInfo};
use std::ops::Range;

/// Screen area the buffer is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin: ScreenPoint,
    pub width: u16,
    pub height: u16,
    /// Index of the first visible block.
    pub scroll: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: ScreenPoint::default(),
            width: 80,
            height: 24,
            scroll: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorBuffer {
    note: Note,
    /// Fixed end of the selection.
    anchor: usize,
    /// Moving end of the selection (the caret).
    head: usize,
    /// Marks for the next typed character, overriding inheritance.
    stored_marks: Option<MarkSet>,
    focused: bool,
    read_only: bool,
    dirty: bool,
    viewport: Viewport,
}

impl EditorBuffer {
    pub fn new(mut note: Note) -> Self {
        note.normalize();
        Self {
            note,
            anchor: 0,
            head: 0,
            stored_marks: None,
            focused: true,
            read_only: false,
            dirty: false,
            viewport: Viewport::default(),
        }
    }

    pub fn from_plain_text(text: &str) -> Self {
        Self::new(Note::from_plain_text("Untitled", text))
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn into_note(self) -> Note {
        self.note
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Caret offset.
    pub fn cursor(&self) -> usize {
        self.head
    }

    /// Index of the block holding the caret.
    pub fn current_block(&self) -> usize {
        self.note.locate(self.head).0
    }

    /// Marks the next typed character will get.
    pub fn pending_marks(&self) -> MarkSet {
        let (index, col) = self.note.locate(self.head);
        self.stored_marks.unwrap_or_else(|| self.inherited_marks(index, col))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Lay the buffer out in a new screen area.
    pub fn set_viewport(&mut self, origin: ScreenPoint, width: u16, height: u16) {
        self.viewport.origin = origin;
        self.viewport.width = width;
        self.viewport.height = height;
        self.scroll_to_cursor();
    }

    /// Indices of the blocks currently on screen.
    pub fn visible_blocks(&self) -> Range<usize> {
        let start = self.viewport.scroll.min(self.note.blocks.len());
        let end = (start + self.viewport.height as usize).min(self.note.blocks.len());
        start..end
    }

    /// Marker drawn before the text of block `index` (`# `, `• `, `2. `, ...).
    pub fn block_prefix(&self, index: usize) -> String {
        match self.note.blocks.get(index).map(|b| b.kind) {
            Some(BlockKind::Heading(level)) => format!("{} ", "#".repeat(level as usize)),
            Some(BlockKind::BulletItem) => "• ".to_string(),
            Some(BlockKind::OrderedItem) => format!("{}. ", self.note.ordinal(index)),
            Some(BlockKind::Blockquote) => "│ ".to_string(),
            Some(BlockKind::CodeBlock) => "  ".to_string(),
            _ => String::new(),
        }
    }

    /// Set the caret, collapsing the selection.
    pub fn set_cursor(&mut self, offset: usize) {
        let offset = offset.min(self.note.content_len());
        self.anchor = offset;
        self.head = offset;
        self.stored_marks = None;
        self.scroll_to_cursor();
    }

    /// Select `from..to`, with the caret at `to`.
    pub fn set_selection(&mut self, from: usize, to: usize) {
        let len = self.note.content_len();
        self.anchor = from.min(len);
        self.head = to.min(len);
        self.stored_marks = None;
        self.scroll_to_cursor();
    }

    pub fn insert_char(&mut self, c: char) {
        if self.read_only {
            return;
        }
        if c == '\n' {
            self.split_block();
            return;
        }
        self.delete_selection();

        let (mut index, mut col) = self.note.locate(self.head);
        if !self.note.blocks[index].kind.holds_text() {
            self.note.blocks.insert(index + 1, Block::paragraph(""));
            index += 1;
            col = 0;
            self.head = self.note.block_start(index);
        }

        let marks = self
            .stored_marks
            .take()
            .unwrap_or_else(|| self.inherited_marks(index, col));
        self.note.blocks[index].insert(col, c, marks);
        self.head += 1;
        self.anchor = self.head;
        self.changed();
    }

    pub fn insert_text(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Delete the selection, or the character before the caret.
    ///
    /// At the start of a styled block the block turns into a paragraph first;
    /// at the start of a paragraph it merges into the previous block.
    pub fn backspace(&mut self) {
        if self.read_only || self.delete_selection() || self.head == 0 {
            return;
        }
        let (index, col) = self.note.locate(self.head);
        let kind = self.note.blocks[index].kind;
        if col == 0 && kind.holds_text() && kind != BlockKind::Paragraph {
            self.note.blocks[index].kind = BlockKind::Paragraph;
            self.changed();
            return;
        }
        self.delete_span(self.head - 1, self.head);
    }

    /// Delete the selection, or the character after the caret.
    pub fn delete_forward(&mut self) {
        if self.read_only || self.delete_selection() || self.head >= self.note.content_len() {
            return;
        }
        self.delete_span(self.head, self.head + 1);
    }

    /// Split the current block at the caret.
    ///
    /// List items and code blocks continue with the same kind; an empty list
    /// item turns into a paragraph instead of splitting.
    pub fn split_block(&mut self) {
        if self.read_only {
            return;
        }
        self.delete_selection();

        let (index, col) = self.note.locate(self.head);
        let kind = self.note.blocks[index].kind;
        if kind.is_list_item() && self.note.blocks[index].is_empty() {
            self.note.blocks[index].kind = BlockKind::Paragraph;
            self.changed();
            return;
        }

        let next_kind = if kind.is_list_item() || kind == BlockKind::CodeBlock {
            kind
        } else {
            BlockKind::Paragraph
        };
        let tail = self.note.blocks[index].split_off(col, next_kind);
        self.note.blocks.insert(index + 1, tail);
        self.head += 1;
        self.anchor = self.head;
        self.stored_marks = None;
        self.changed();
    }

    pub fn move_left(&mut self, extend: bool) {
        let (from, _) = self.bounds();
        let target = if !extend && self.anchor != self.head {
            from
        } else {
            self.head.saturating_sub(1)
        };
        self.move_to(target, extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        let (_, to) = self.bounds();
        let target = if !extend && self.anchor != self.head {
            to
        } else {
            (self.head + 1).min(self.note.content_len())
        };
        self.move_to(target, extend);
    }

    pub fn move_up(&mut self) {
        let (index, col) = self.note.locate(self.head);
        let target = if index == 0 {
            0
        } else {
            self.offset_in_block(index - 1, col)
        };
        self.move_to(target, false);
    }

    pub fn move_down(&mut self) {
        let (index, col) = self.note.locate(self.head);
        let target = if index + 1 >= self.note.blocks.len() {
            self.note.content_len()
        } else {
            self.offset_in_block(index + 1, col)
        };
        self.move_to(target, false);
    }

    pub fn move_home(&mut self) {
        let index = self.current_block();
        self.move_to(self.note.block_start(index), false);
    }

    pub fn move_end(&mut self) {
        let index = self.current_block();
        self.move_to(self.offset_in_block(index, usize::MAX), false);
    }

    /// Document offset of the text position drawn at `point`.
    ///
    /// `None` if the point is outside the viewport.
    pub fn offset_at_point(&self, point: ScreenPoint) -> Option<usize> {
        let vp = self.viewport;
        if point.x < vp.origin.x
            || point.y < vp.origin.y
            || point.x >= vp.origin.x.saturating_add(vp.width)
            || point.y >= vp.origin.y.saturating_add(vp.height)
        {
            return None;
        }

        let row = vp.scroll + (point.y - vp.origin.y) as usize;
        let index = row.min(self.note.blocks.len().saturating_sub(1));
        let prefix = self.block_prefix(index).chars().count();
        let col = ((point.x - vp.origin.x) as usize).saturating_sub(prefix);
        Some(self.offset_in_block(index, col))
    }

    /// Put the caret at the text position drawn at `point`.
    ///
    /// Returns `false` if the point is outside the viewport.
    pub fn set_cursor_from_point(&mut self, point: ScreenPoint) -> bool {
        match self.offset_at_point(point) {
            Some(target) => {
                self.move_to(target, false);
                true
            }
            None => false,
        }
    }

    fn move_to(&mut self, target: usize, extend: bool) {
        self.head = target;
        if !extend {
            self.anchor = target;
        }
        self.stored_marks = None;
        self.scroll_to_cursor();
    }

    fn offset_in_block(&self, index: usize, col: usize) -> usize {
        let len = self.note.blocks.get(index).map_or(0, Block::len);
        self.note.block_start(index) + col.min(len)
    }

    fn bounds(&self) -> (usize, usize) {
        (self.anchor.min(self.head), self.anchor.max(self.head))
    }

    fn inherited_marks(&self, index: usize, col: usize) -> MarkSet {
        match col.checked_sub(1) {
            Some(prev) => self.note.blocks[index].mark_at(prev),
            None => MarkSet::empty(),
        }
    }

    /// Delete a non-empty selection. Returns `true` if something was deleted.
    fn delete_selection(&mut self) -> bool {
        let (from, to) = self.bounds();
        if from == to {
            return false;
        }
        self.delete_span(from, to);
        true
    }

    /// Remove `from..to`, joining the first and last block if the span
    /// crosses block boundaries. The joined block keeps the first block's
    /// kind unless that one is a divider.
    fn delete_span(&mut self, from: usize, to: usize) {
        let (first, first_col) = self.note.locate(from);
        let (last, last_col) = self.note.locate(to);

        if first == last {
            self.note.blocks[first].drain(first_col, last_col);
        } else {
            let last_kind = self.note.blocks[last].kind;
            let tail = self.note.blocks[last].split_off(last_col, last_kind);
            self.note.blocks.drain(first + 1..=last);

            let block = &mut self.note.blocks[first];
            let len = block.len();
            block.drain(first_col, len);
            if !block.kind.holds_text() {
                block.kind = tail.kind;
            }
            block.append(tail);
        }

        self.anchor = from;
        self.head = from;
        self.changed();
    }

    /// Indices of the blocks touched by the selection.
    fn selected_blocks(&self) -> Range<usize> {
        let (from, to) = self.bounds();
        self.note.locate(from).0..self.note.locate(to).0 + 1
    }

    fn toggle_block_kind(&mut self, kind: BlockKind) -> Result<(), DocumentError> {
        let blocks: Vec<usize> = self
            .selected_blocks()
            .filter(|&i| self.note.blocks[i].kind.holds_text())
            .collect();
        if blocks.is_empty() {
            return Err(DocumentError::Rejected(
                "selection holds no text block".to_string(),
            ));
        }

        let all_set = blocks.iter().all(|&i| self.note.blocks[i].kind == kind);
        let target = if all_set { BlockKind::Paragraph } else { kind };
        for i in blocks {
            self.note.blocks[i].kind = target;
        }
        Ok(())
    }

    fn set_block_kind(&mut self, kind: BlockKind) {
        for i in self.selected_blocks() {
            if self.note.blocks[i].kind.holds_text() {
                self.note.blocks[i].kind = kind;
            }
        }
    }

    fn toggle_mark(&mut self, mark: MarkSet) {
        let (from, to) = self.bounds();
        if from == to {
            let pending = self.pending_marks();
            self.stored_marks = Some(pending ^ mark);
            return;
        }

        let segments: Vec<(usize, usize, usize)> = self
            .selected_blocks()
            .map(|i| {
                let start = self.note.block_start(i);
                let len = self.note.blocks[i].len();
                let seg_from = from.saturating_sub(start).min(len);
                let seg_to = to.saturating_sub(start).min(len);
                (i, seg_from, seg_to)
            })
            .filter(|(_, f, t)| f < t)
            .collect();

        let all_set = segments
            .iter()
            .all(|&(i, f, t)| self.note.blocks[i].has_mark(f, t, mark));
        for (i, f, t) in segments {
            self.note.blocks[i].set_mark(f, t, mark, !all_set);
        }
    }

    fn insert_horizontal_rule(&mut self) {
        let (_, to) = self.bounds();
        let index = self.note.locate(to).0;
        self.note.blocks.insert(index + 1, Block::horizontal_rule());
    }

    fn scroll_to_cursor(&mut self) {
        let index = self.current_block();
        let height = (self.viewport.height as usize).max(1);
        if index < self.viewport.scroll {
            self.viewport.scroll = index;
        } else if index >= self.viewport.scroll + height {
            self.viewport.scroll = index + 1 - height;
        }
    }

    fn changed(&mut self) {
        self.dirty = true;
        self.note.touch();
        self.scroll_to_cursor();
    }
}

impl DocumentModel for EditorBuffer {
    fn text_before_cursor(&self) -> String {
        let (index, col) = self.note.locate(self.head);
        self.note.blocks[index].prefix(col)
    }

    fn selection(&self) -> SelectionInfo {
        SelectionInfo::range(self.anchor, self.head)
    }

    fn line_start_offset(&self) -> usize {
        self.note.block_start(self.current_block())
    }

    fn content_len(&self) -> usize {
        self.note.content_len()
    }

    fn coordinates_at(&self, offset: usize) -> Result<ScreenPoint, DocumentError> {
        let len = self.note.content_len();
        if offset > len {
            return Err(DocumentError::InvalidOffset { offset, len });
        }

        let (index, col) = self.note.locate(offset);
        let vp = self.viewport;
        if index < vp.scroll || index - vp.scroll >= vp.height as usize {
            return Err(DocumentError::Offscreen { offset });
        }

        let x = self.block_prefix(index).chars().count() + col;
        if x >= vp.width as usize {
            return Err(DocumentError::Offscreen { offset });
        }

        Ok(ScreenPoint::new(
            vp.origin.x + x as u16,
            vp.origin.y + (index - vp.scroll) as u16,
        ))
    }

    fn viewport_origin(&self) -> ScreenPoint {
        self.viewport.origin
    }

    fn apply_command(&mut self, command: &EditorCommand) -> Result<(), DocumentError> {
        if self.read_only {
            return Err(DocumentError::Rejected("note is read-only".to_string()));
        }

        match *command {
            EditorCommand::ToggleHeading { level } => {
                if !(1..=3).contains(&level) {
                    return Err(DocumentError::Rejected(format!(
                        "unsupported heading level {}",
                        level
                    )));
                }
                self.toggle_block_kind(BlockKind::Heading(level))?
            }
            EditorCommand::SetParagraph => self.set_block_kind(BlockKind::Paragraph),
            EditorCommand::ToggleBulletList => self.toggle_block_kind(BlockKind::BulletItem)?,
            EditorCommand::ToggleOrderedList => self.toggle_block_kind(BlockKind::OrderedItem)?,
            EditorCommand::ToggleBlockquote => self.toggle_block_kind(BlockKind::Blockquote)?,
            EditorCommand::ToggleCodeBlock => self.toggle_block_kind(BlockKind::CodeBlock)?,
            EditorCommand::InsertHorizontalRule => self.insert_horizontal_rule(),
            EditorCommand::ToggleBold => self.toggle_mark(MarkSet::BOLD),
            EditorCommand::ToggleItalic => self.toggle_mark(MarkSet::ITALIC),
            EditorCommand::ToggleStrike => self.toggle_mark(MarkSet::STRIKE),
        }

        log::debug!("Applied {:?} at offset {}", command, self.head);
        self.changed();
        Ok(())
    }

    fn delete_range(&mut self, from: usize, to: usize) -> Result<(), DocumentError> {
        let len = self.note.content_len();
        if from > to || to > len {
            return Err(DocumentError::InvalidRange { from, to, len });
        }
        if self.read_only {
            return Err(DocumentError::Rejected("note is read-only".to_string()));
        }
        if from < to {
            self.delete_span(from, to);
        }
        Ok(())
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
