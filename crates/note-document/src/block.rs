//! Blocks and inline marks.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Inline formatting of one character.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MarkSet: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const STRIKE = 1 << 2;
    }
}

/// Kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "level", rename_all = "snake_case")]
pub enum BlockKind {
    #[default]
    Paragraph,
    /// Heading level 1 to 3.
    Heading(u8),
    BulletItem,
    OrderedItem,
    Blockquote,
    CodeBlock,
    /// A divider line; never holds text.
    HorizontalRule,
}

impl BlockKind {
    pub fn is_list_item(&self) -> bool {
        matches!(self, BlockKind::BulletItem | BlockKind::OrderedItem)
    }

    /// Whether the caret can type into this block.
    pub fn holds_text(&self) -> bool {
        !matches!(self, BlockKind::HorizontalRule)
    }
}

/// One block of a note: its kind, its text and one mark set per character.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    marks: Vec<MarkSet>,
}

impl Block {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        let text = text.into();
        let marks = vec![MarkSet::empty(); text.chars().count()];
        Self { kind, text, marks }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, text)
    }

    pub fn horizontal_rule() -> Self {
        Self::new(BlockKind::HorizontalRule, "")
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Marks of the character at `index`.
    pub fn mark_at(&self, index: usize) -> MarkSet {
        self.marks.get(index).copied().unwrap_or_default()
    }

    pub fn marks(&self) -> &[MarkSet] {
        &self.marks
    }

    /// Text of the first `count` characters.
    pub fn prefix(&self, count: usize) -> String {
        self.text.chars().take(count).collect()
    }

    pub(crate) fn insert(&mut self, index: usize, c: char, marks: MarkSet) {
        let at = byte_index(&self.text, index);
        self.text.insert(at, c);
        self.marks.insert(index.min(self.marks.len()), marks);
    }

    /// Split off everything from `index` into a new block of `kind`.
    pub(crate) fn split_off(&mut self, index: usize, kind: BlockKind) -> Block {
        let at = byte_index(&self.text, index);
        let text = self.text.split_off(at);
        let marks = self.marks.split_off(index.min(self.marks.len()));
        Block { kind, text, marks }
    }

    pub(crate) fn append(&mut self, mut other: Block) {
        self.text.push_str(&other.text);
        self.marks.append(&mut other.marks);
    }

    /// Remove the characters in `from..to`.
    pub(crate) fn drain(&mut self, from: usize, to: usize) {
        let start = byte_index(&self.text, from);
        let end = byte_index(&self.text, to);
        self.text.replace_range(start..end, "");
        let to = to.min(self.marks.len());
        self.marks.drain(from.min(to)..to);
    }

    /// Check if every character in `from..to` carries `mark`
    pub(crate) fn has_mark(&self, from: usize, to: usize, mark: MarkSet) -> bool {
        let to = to.min(self.marks.len());
        self.marks[from.min(to)..to].iter().all(|m| m.contains(mark))
    }

    /// Add or remove `mark` on `from..to`.
    pub(crate) fn set_mark(&mut self, from: usize, to: usize, mark: MarkSet, on: bool) {
        let to = to.min(self.marks.len());
        for m in &mut self.marks[from.min(to)..to] {
            m.set(mark, on);
        }
    }

    /// Restore the one-mark-set-per-character invariant after deserializing.
    pub(crate) fn normalize(&mut self) {
        if !self.kind.holds_text() {
            self.text.clear();
        }
        let len = self.len();
        self.marks.resize(len, MarkSet::empty());
    }
}

/// Byte offset of the character at `index`, or the end of the string.
fn byte_index(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map(|(i, _)| i).unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_multibyte() {
        let mut block = Block::paragraph("über");
        block.insert(1, 'x', MarkSet::BOLD);
        assert_eq!(block.text, "üxber");
        assert_eq!(block.mark_at(1), MarkSet::BOLD);
        assert_eq!(block.marks().len(), 5);
    }

    #[test]
    fn test_split_and_append() {
        let mut block = Block::paragraph("hello world");
        let tail = block.split_off(5, BlockKind::BulletItem);
        assert_eq!(block.text, "hello");
        assert_eq!(tail.text, " world");
        assert_eq!(tail.kind, BlockKind::BulletItem);
        assert_eq!(tail.marks().len(), 6);

        block.append(tail);
        assert_eq!(block.text, "hello world");
        assert_eq!(block.marks().len(), 11);
    }

    #[test]
    fn test_set_mark() {
        let mut block = Block::paragraph("abcd");
        block.set_mark(1, 3, MarkSet::ITALIC, true);
        assert_eq!(
            block.marks(),
            &[MarkSet::empty(), MarkSet::ITALIC, MarkSet::ITALIC, MarkSet::empty()]
        );
        assert!(block.has_mark(1, 3, MarkSet::ITALIC));
        assert!(!block.has_mark(0, 3, MarkSet::ITALIC));
        assert!(!block.has_mark(1, 3, MarkSet::BOLD));

        block.set_mark(0, 10, MarkSet::ITALIC, false);
        assert!(block.marks().iter().all(|m| m.is_empty()));
    }

    #[test]
    fn test_drain() {
        let mut block = Block::paragraph("/h1 title");
        block.drain(0, 3);
        assert_eq!(block.text, " title");
        assert_eq!(block.marks().len(), 6);
    }

    #[test]
    fn test_block_kind_serialization() {
        let json = serde_json::to_string(&BlockKind::Heading(2)).unwrap();
        assert_eq!(json, r#"{"type":"heading","level":2}"#);
        let kind: BlockKind = serde_json::from_str(r#"{"type":"bullet_item"}"#).unwrap();
        assert_eq!(kind, BlockKind::BulletItem);
    }

    #[test]
    fn test_normalize_pads_marks() {
        let mut block: Block = serde_json::from_str(r#"{"kind":{"type":"paragraph"},"text":"abc"}"#).unwrap();
        assert!(block.marks().is_empty());
        block.normalize();
        assert_eq!(block.marks().len(), 3);
    }
}
