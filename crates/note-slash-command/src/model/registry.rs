//! Command registry and filtering
//!
//! The registry is the ordered list of commands offered by the palette. The
//! filter narrows it to the commands matching the text typed after `/`,
//! keeping registry order (no ranking).

use super::command::{Command, EditorCommand, IconRef};
use super::locale::Locale;
use crate::error::PaletteError;
use std::collections::HashSet;

/// Ordered, immutable list of palette commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Build a registry from explicit commands.
    ///
    /// Titles are lookup keys, so duplicates are rejected.
    pub fn new(commands: Vec<Command>) -> Result<Self, PaletteError> {
        let mut seen = HashSet::new();
        for cmd in &commands {
            if !seen.insert(cmd.title.as_str()) {
                return Err(PaletteError::DuplicateTitle(cmd.title.clone()));
            }
        }
        Ok(Self { commands })
    }

    /// The built-in commands, titled for `locale`
    pub fn for_locale(locale: Locale) -> Self {
        let dict = locale.commands();
        let commands = vec![
            Command::new(
                dict.heading1,
                IconRef("Heading1"),
                EditorCommand::ToggleHeading { level: 1 },
            )
            .with_shortcut("#")
            .with_keywords(["h1", "title", "header"]),
            Command::new(
                dict.heading2,
                IconRef("Heading2"),
                EditorCommand::ToggleHeading { level: 2 },
            )
            .with_shortcut("##")
            .with_keywords(["h2", "subtitle", "header"]),
            Command::new(
                dict.heading3,
                IconRef("Heading3"),
                EditorCommand::ToggleHeading { level: 3 },
            )
            .with_shortcut("###")
            .with_keywords(["h3", "subheader", "header"]),
            Command::new(dict.paragraph, IconRef("Pilcrow"), EditorCommand::SetParagraph)
                .with_keywords(["p", "text", "normal"]),
            Command::new(dict.bullet_list, IconRef("List"), EditorCommand::ToggleBulletList)
                .with_shortcut("-")
                .with_keywords(["ul", "bullet", "unordered"]),
            Command::new(
                dict.ordered_list,
                IconRef("ListOrdered"),
                EditorCommand::ToggleOrderedList,
            )
            .with_shortcut("1.")
            .with_keywords(["ol", "number", "ordered"]),
            Command::new(dict.blockquote, IconRef("Quote"), EditorCommand::ToggleBlockquote)
                .with_shortcut(">")
                .with_keywords(["quote", "blockquote", "cite"]),
            Command::new(
                dict.horizontal_rule,
                IconRef("Minus"),
                EditorCommand::InsertHorizontalRule,
            )
            .with_shortcut("---")
            .with_keywords(["hr", "divider", "line"]),
            Command::new(dict.code_block, IconRef("Code"), EditorCommand::ToggleCodeBlock)
                .with_shortcut("```")
                .with_keywords(["code", "codeblock", "pre"]),
            Command::new(dict.bold, IconRef("Bold"), EditorCommand::ToggleBold)
                .with_shortcut("**")
                .with_keywords(["b", "strong", "bold"]),
            Command::new(dict.italic, IconRef("Italic"), EditorCommand::ToggleItalic)
                .with_shortcut("*")
                .with_keywords(["i", "em", "italic"]),
            Command::new(dict.strike, IconRef("Strikethrough"), EditorCommand::ToggleStrike)
                .with_shortcut("~~")
                .with_keywords(["s", "del", "strike", "strikethrough"]),
        ];

        Self { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Look a command up by its title
    pub fn find(&self, title: &str) -> Option<&Command> {
        self.commands.iter().find(|cmd| cmd.title == title)
    }

    /// Commands matching `query`, in registry order
    pub fn filter(&self, query: &str) -> FilteredList {
        filter_commands(&self.commands, query)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Commands matching the current query, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredList {
    items: Vec<Command>,
}

impl FilteredList {
    pub fn items(&self) -> &[Command] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Command> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.items.iter()
    }

    /// Position of the command titled `title`
    pub fn position(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|cmd| cmd.title == title)
    }
}

/// Filter commands based on a search query
///
/// Case-insensitive substring match on the title and on every keyword. A
/// query that is empty after trimming returns every command.
pub fn filter_commands(commands: &[Command], query: &str) -> FilteredList {
    let query = query.trim();
    if query.is_empty() {
        return FilteredList {
            items: commands.to_vec(),
        };
    }

    let query_lower = query.to_lowercase();
    FilteredList {
        items: commands
            .iter()
            .filter(|cmd| cmd.matches(&query_lower))
            .cloned()
            .collect(),
    }
}
