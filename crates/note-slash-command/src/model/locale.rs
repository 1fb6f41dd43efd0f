//! Localized strings for the palette.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Supported UI locales.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    #[default]
    #[strum(to_string = "en-US", serialize = "en")]
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
    #[strum(to_string = "de-DE", serialize = "de")]
    #[serde(rename = "de-DE", alias = "de")]
    DeDe,
}

/// Command titles for one locale.
#[derive(Debug)]
pub struct CommandDictionary {
    pub heading1: &'static str,
    pub heading2: &'static str,
    pub heading3: &'static str,
    pub paragraph: &'static str,
    pub bullet_list: &'static str,
    pub ordered_list: &'static str,
    pub blockquote: &'static str,
    pub horizontal_rule: &'static str,
    pub code_block: &'static str,
    pub bold: &'static str,
    pub italic: &'static str,
    pub strike: &'static str,
}

/// Palette chrome strings for one locale.
#[derive(Debug)]
pub struct PaletteDictionary {
    pub title: &'static str,
    pub no_results: &'static str,
    pub placeholder: &'static str,
}

const EN_COMMANDS: CommandDictionary = CommandDictionary {
    heading1: "Heading 1",
    heading2: "Heading 2",
    heading3: "Heading 3",
    paragraph: "Normal text",
    bullet_list: "Bullet list",
    ordered_list: "Numbered list",
    blockquote: "Quote",
    horizontal_rule: "Divider",
    code_block: "Code block",
    bold: "Bold",
    italic: "Italic",
    strike: "Strikethrough",
};

const DE_COMMANDS: CommandDictionary = CommandDictionary {
    heading1: "Überschrift 1",
    heading2: "Überschrift 2",
    heading3: "Überschrift 3",
    paragraph: "Normaler Text",
    bullet_list: "Aufzählungsliste",
    ordered_list: "Nummerierte Liste",
    blockquote: "Zitat",
    horizontal_rule: "Trennlinie",
    code_block: "Codeblock",
    bold: "Fett",
    italic: "Kursiv",
    strike: "Durchgestrichen",
};

const EN_PALETTE: PaletteDictionary = PaletteDictionary {
    title: "Commands",
    no_results: "No options found",
    placeholder: "Type to filter commands...",
};

const DE_PALETTE: PaletteDictionary = PaletteDictionary {
    title: "Befehle",
    no_results: "Keine Optionen gefunden",
    placeholder: "Beginne zu tippen, um zu filtern...",
};

impl Locale {
    /// Command titles for this locale
    pub fn commands(self) -> &'static CommandDictionary {
        match self {
            Locale::EnUs => &EN_COMMANDS,
            Locale::DeDe => &DE_COMMANDS,
        }
    }

    /// Palette chrome strings for this locale
    pub fn palette(self) -> &'static PaletteDictionary {
        match self {
            Locale::EnUs => &EN_PALETTE,
            Locale::DeDe => &DE_PALETTE,
        }
    }
}
