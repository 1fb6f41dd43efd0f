//! Extension traits the host editor implements.

mod document;
mod positioner;
mod theme_provider;

pub use document::{DocumentError, DocumentModel, DocumentSnapshot, ScreenPoint, SelectionInfo};
pub use positioner::{AnchorRect, NoOpPositioner, Positioner};
pub use theme_provider::{DefaultTheme, PaletteTheme};
