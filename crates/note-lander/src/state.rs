use note_config::AppConfig;
use note_document::EditorBuffer;
use note_slash_command::{
    AnchoredPopup, CommandRegistry, EditorId, PaletteController, PaletteSessions,
};
use ratatui::layout::Rect;
use std::path::PathBuf;

/// The note being edited
#[derive(Debug, Clone)]
pub struct EditorState {
    pub id: EditorId,
    pub buffer: EditorBuffer,
    /// Where the note is saved
    pub note_path: PathBuf,
}

/// Transient message shown in the status bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusState {
    pub message: Option<String>,
    pub is_error: bool,
}

impl StatusState {
    pub fn info(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.is_error = false;
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.is_error = true;
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.is_error = false;
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub config: AppConfig,
    /// Full terminal area
    pub screen: Rect,
    pub editor: EditorState,
    pub palettes: PaletteSessions<AnchoredPopup>,
    pub status: StatusState,
}

impl AppState {
    pub fn new(config: AppConfig, buffer: EditorBuffer, note_path: PathBuf) -> Self {
        let id = EditorId::new();
        let mut palettes = PaletteSessions::new();
        palettes.attach(
            id,
            PaletteController::new(
                CommandRegistry::for_locale(config.locale),
                AnchoredPopup::default(),
            ),
        );

        Self {
            running: true,
            config,
            screen: Rect::default(),
            editor: EditorState {
                id,
                buffer,
                note_path,
            },
            palettes,
            status: StatusState::default(),
        }
    }

    /// Palette of the editor
    pub fn palette(&self) -> Option<&PaletteController<AnchoredPopup>> {
        self.palettes.get(self.editor.id)
    }

    pub fn palette_open(&self) -> bool {
        self.palette().is_some_and(|p| p.is_open())
    }
}
