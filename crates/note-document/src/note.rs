//! Notes: an id, a title and a list of blocks.

use crate::block::{Block, BlockKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A note as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub blocks: Vec<Block>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// An empty note with a single empty paragraph.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            blocks: vec![Block::paragraph("")],
            created_at: now,
            updated_at: now,
        }
    }

    /// A note with one paragraph per line of `text`.
    pub fn from_plain_text(title: impl Into<String>, text: &str) -> Self {
        let mut note = Self::new(title);
        note.blocks = text.split('\n').map(Block::paragraph).collect();
        note
    }

    /// Text of all blocks joined with `\n` (one character per block boundary).
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of offsets: every character plus one separator between blocks.
    pub fn content_len(&self) -> usize {
        let chars: usize = self.blocks.iter().map(Block::len).sum();
        chars + self.blocks.len().saturating_sub(1)
    }

    /// Absolute offset of the first character of block `index`.
    pub fn block_start(&self, index: usize) -> usize {
        self.blocks.iter().take(index).map(|b| b.len() + 1).sum()
    }

    /// Block index and in-block column of an absolute offset.
    ///
    /// Offsets past the end resolve to the end of the last block.
    pub fn locate(&self, offset: usize) -> (usize, usize) {
        let mut start = 0;
        for (index, block) in self.blocks.iter().enumerate() {
            let end = start + block.len();
            if offset <= end {
                return (index, offset - start);
            }
            start = end + 1;
        }
        let last = self.blocks.len().saturating_sub(1);
        (last, self.blocks.get(last).map_or(0, Block::len))
    }

    /// 1-based number of an ordered item within its run of ordered items.
    pub fn ordinal(&self, index: usize) -> usize {
        self.blocks[..index.min(self.blocks.len())]
            .iter()
            .rev()
            .take_while(|b| b.kind == BlockKind::OrderedItem)
            .count()
            + 1
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Repair invariants after loading: at least one block, and marks
    /// aligned with text.
    pub fn normalize(&mut self) {
        if self.blocks.is_empty() {
            self.blocks.push(Block::paragraph(""));
        }
        for block in &mut self.blocks {
            block.normalize();
        }
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_offsets() {
        let note = Note::from_plain_text("t", "ab\n\ncde");
        assert_eq!(note.content_len(), 7);
        assert_eq!(note.block_start(0), 0);
        assert_eq!(note.block_start(1), 3);
        assert_eq!(note.block_start(2), 4);

        assert_eq!(note.locate(0), (0, 0));
        assert_eq!(note.locate(2), (0, 2));
        assert_eq!(note.locate(3), (1, 0));
        assert_eq!(note.locate(4), (2, 0));
        assert_eq!(note.locate(7), (2, 3));
        assert_eq!(note.locate(99), (2, 3));
    }

    #[test]
    fn test_plain_text_round_trip() {
        let note = Note::from_plain_text("t", "one\ntwo");
        assert_eq!(note.plain_text(), "one\ntwo");
        assert_eq!(note.blocks.len(), 2);
    }

    #[test]
    fn test_ordinal() {
        let mut note = Note::from_plain_text("t", "a\nb\nc\nd");
        note.blocks[1].kind = BlockKind::OrderedItem;
        note.blocks[2].kind = BlockKind::OrderedItem;
        assert_eq!(note.ordinal(1), 1);
        assert_eq!(note.ordinal(2), 2);
    }

    #[test]
    fn test_json_and_normalize() {
        let note = Note::from_plain_text("Groceries", "milk");
        let json = serde_json::to_string_pretty(&note).unwrap();
        let mut loaded: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, note);

        loaded.blocks.clear();
        loaded.normalize();
        assert_eq!(loaded.blocks.len(), 1);
    }
}
