//! # note-document
//!
//! The note model of the editor and an [`EditorBuffer`] that edits it.
//!
//! A note is a flat list of [`Block`]s (paragraphs, headings, list items,
//! quotes, code blocks, dividers). Each character carries a [`MarkSet`] for
//! bold, italic and strikethrough. [`EditorBuffer`] implements the slash
//! palette's [`DocumentModel`](note_slash_command::DocumentModel), so the
//! palette can read the text before the caret and apply its commands.

pub mod block;
pub mod buffer;
pub mod note;

pub use block::{Block, BlockKind, MarkSet};
pub use buffer::{EditorBuffer, Viewport};
pub use note::Note;
