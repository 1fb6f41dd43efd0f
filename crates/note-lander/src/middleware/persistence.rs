//! Persistence Middleware
//!
//! Writes the note on `Global(Save)`, on quit when autosave is enabled, and
//! keeps the recently opened notes list up to date.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use note_config::{save_note, RecentNotes};
use std::path::PathBuf;

pub struct PersistenceMiddleware {
    recent: RecentNotes,
    /// Where the recent notes list lives; `None` disables tracking
    recent_path: Option<PathBuf>,
}

impl PersistenceMiddleware {
    pub fn new() -> Self {
        let recent_path = note_config::paths::recent_notes_path()
            .map_err(|e| log::warn!("Recent notes disabled: {:#}", e))
            .ok();
        Self {
            recent: RecentNotes::load(),
            recent_path,
        }
    }

    fn remember(&mut self, state: &AppState) {
        let Some(path) = &self.recent_path else {
            return;
        };
        self.recent.touch(
            state.editor.note_path.clone(),
            state.editor.buffer.note().title.clone(),
        );
        if let Err(e) = self.recent.save_to_path(path) {
            log::warn!("Failed to save recent notes: {:#}", e);
        }
    }

    fn save(&mut self, state: &AppState) -> anyhow::Result<PathBuf> {
        let path = state.editor.note_path.clone();
        save_note(&path, state.editor.buffer.note())?;
        self.remember(state);
        Ok(path)
    }
}

impl Default for PersistenceMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for PersistenceMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::Start) => {
                self.remember(state);
                true
            }
            Action::Global(GlobalAction::Save) => {
                match self.save(state) {
                    Ok(path) => dispatcher.dispatch(Action::Global(GlobalAction::Saved(path))),
                    Err(e) => {
                        log::error!("Failed to save note: {:#}", e);
                        dispatcher.dispatch(Action::Global(GlobalAction::SaveFailed(format!(
                            "{:#}",
                            e
                        ))));
                    }
                }
                false
            }
            Action::Global(GlobalAction::Quit) => {
                if state.config.autosave && state.editor.buffer.is_dirty() {
                    log::info!("Autosaving before quit");
                    if let Err(e) = self.save(state) {
                        log::error!("Autosave failed: {:#}", e);
                    }
                }
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;
    use std::sync::mpsc;

    fn middleware(dir: &std::path::Path) -> PersistenceMiddleware {
        PersistenceMiddleware {
            recent: RecentNotes::default(),
            recent_path: Some(dir.join("recent-notes.toml")),
        }
    }

    #[test]
    fn test_save_writes_note_and_recent_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state("hello");
        state.editor.note_path = dir.path().join("hello.json");

        let (tx, rx) = mpsc::channel();
        let mut mw = middleware(dir.path());
        assert!(!mw.handle(&Action::Global(GlobalAction::Save), &state, &Dispatcher::new(tx)));

        let saved = note_config::load_note(&state.editor.note_path).unwrap();
        assert_eq!(saved.plain_text(), "hello");
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Global(GlobalAction::Saved(path))) if path == state.editor.note_path
        ));

        let recent = RecentNotes::load_from_path(&dir.path().join("recent-notes.toml")).unwrap();
        assert_eq!(recent.notes().len(), 1);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let mut state = test_state("hello");
        // parent is a regular file
        state.editor.note_path = blocker.join("note.json");

        let (tx, rx) = mpsc::channel();
        let mut mw = middleware(dir.path());
        mw.handle(&Action::Global(GlobalAction::Save), &state, &Dispatcher::new(tx));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Global(GlobalAction::SaveFailed(_)))
        ));
    }

    #[test]
    fn test_autosave_on_quit_only_when_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state("clean");
        state.editor.note_path = dir.path().join("clean.json");
        let (tx, _rx) = mpsc::channel();
        let mut mw = middleware(dir.path());

        assert!(mw.handle(&Action::Global(GlobalAction::Quit), &state, &Dispatcher::new(tx.clone())));
        assert!(!state.editor.note_path.exists());

        state.editor.buffer.insert_char('!');
        assert!(mw.handle(&Action::Global(GlobalAction::Quit), &state, &Dispatcher::new(tx)));
        assert!(state.editor.note_path.exists());
    }
}
