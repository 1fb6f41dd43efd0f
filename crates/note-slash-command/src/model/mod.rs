//! Command registry, filtering and localized strings.

mod command;
mod locale;
mod registry;

pub use command::{Command, EditorCommand, IconRef};
pub use locale::{CommandDictionary, Locale, PaletteDictionary};
pub use registry::{filter_commands, CommandRegistry, FilteredList};
