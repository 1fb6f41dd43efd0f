//! Palette commands

use std::fmt;

/// Identifier into an external icon set. Opaque to the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconRef(pub &'static str);

impl IconRef {
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A mutation request the document applies to its current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    /// Turn the current block into a heading of `level` (1-3), or back into a paragraph
    ToggleHeading { level: u8 },
    /// Turn the current block into a plain paragraph
    SetParagraph,
    /// Toggle a bullet list item
    ToggleBulletList,
    /// Toggle a numbered list item
    ToggleOrderedList,
    /// Toggle a quote block
    ToggleBlockquote,
    /// Insert a divider after the current block
    InsertHorizontalRule,
    /// Toggle a code block
    ToggleCodeBlock,
    /// Toggle bold on the selection or for the next typed text
    ToggleBold,
    /// Toggle italic on the selection or for the next typed text
    ToggleItalic,
    /// Toggle strikethrough on the selection or for the next typed text
    ToggleStrike,
}

/// A single palette entry.
///
/// Registry entries never change after construction. `title` is unique within
/// a registry and doubles as lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub title: String,
    pub icon: IconRef,
    pub shortcut_hint: Option<String>,
    pub keywords: Vec<String>,
    pub action: EditorCommand,
}

impl Command {
    pub fn new(title: impl Into<String>, icon: IconRef, action: EditorCommand) -> Self {
        Self {
            title: title.into(),
            icon,
            shortcut_hint: None,
            keywords: Vec::new(),
            action,
        }
    }

    /// Set the display-only shortcut hint
    pub fn with_shortcut(mut self, hint: impl Into<String>) -> Self {
        self.shortcut_hint = Some(hint.into());
        self
    }

    /// Set the matching keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether an already lower-cased, trimmed query matches this command.
    ///
    /// Matches if the title or any keyword contains the query as a substring.
    pub fn matches(&self, normalized_query: &str) -> bool {
        self.title.to_lowercase().contains(normalized_query)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(normalized_query))
    }
}
