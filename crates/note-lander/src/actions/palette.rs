//! Palette actions - only dispatched while the slash palette is open

use note_slash_command::PaletteKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    /// One of the intercepted keys
    Key(PaletteKey),
    /// Click on a command row (index into the filtered list)
    SelectRow(usize),
    /// Left click outside the palette, at a terminal cell
    ClickOutside { column: u16, row: u16 },
    /// Focus moved away from the editor
    OutsideInteraction,
}
