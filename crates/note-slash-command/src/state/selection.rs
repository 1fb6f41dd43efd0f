//! Highlighted row of the palette list.

use crate::model::{Command, FilteredList};

/// Index of the highlighted command in the filtered list.
///
/// Navigation wraps at both ends. With an empty list every move is a no-op
/// and the index stays 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionIndex {
    index: usize,
}

impl SelectionIndex {
    pub fn get(&self) -> usize {
        self.index
    }

    /// Move the highlight one row up, wrapping from the first row to the last.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index == 0 {
            len - 1
        } else {
            (self.index - 1).min(len - 1)
        };
    }

    /// Move the highlight one row down, wrapping from the last row to the first.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index + 1 >= len {
            0
        } else {
            self.index + 1
        };
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Snap back to the first row if the list shrank below the index.
    pub fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.index = 0;
        }
    }

    /// Jump to `index` if it lies within the list.
    pub fn set(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// The highlighted command, if any.
    pub fn current<'a>(&self, list: &'a FilteredList) -> Option<&'a Command> {
        list.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CommandRegistry;

    #[test]
    fn test_move_down_wraps() {
        let mut sel = SelectionIndex::default();
        sel.move_down(3);
        sel.move_down(3);
        assert_eq!(sel.get(), 2);
        sel.move_down(3);
        assert_eq!(sel.get(), 0);
    }

    #[test]
    fn test_move_up_wraps() {
        let mut sel = SelectionIndex::default();
        sel.move_up(4);
        assert_eq!(sel.get(), 3);
        sel.move_up(4);
        assert_eq!(sel.get(), 2);
    }

    #[test]
    fn test_moves_on_empty_list_are_noops() {
        let mut sel = SelectionIndex::default();
        sel.move_up(0);
        sel.move_down(0);
        assert_eq!(sel.get(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut sel = SelectionIndex::default();
        for _ in 0..12 {
            sel.move_down(12);
        }
        assert_eq!(sel.get(), 0);
        for _ in 0..12 {
            sel.move_up(12);
        }
        assert_eq!(sel.get(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut sel = SelectionIndex::default();
        assert!(sel.set(5, 8));
        sel.clamp(8);
        assert_eq!(sel.get(), 5);
        sel.clamp(3);
        assert_eq!(sel.get(), 0);
        assert!(!sel.set(3, 3));
    }

    #[test]
    fn test_current_command() {
        let list = CommandRegistry::default().filter("heading");
        let mut sel = SelectionIndex::default();
        sel.move_down(list.len());
        assert_eq!(sel.current(&list).map(|c| c.title.as_str()), Some("Heading 2"));
        assert!(sel.current(&FilteredList::default()).is_none());
    }
}
