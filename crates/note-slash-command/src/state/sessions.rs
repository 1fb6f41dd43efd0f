//! One palette session per editor instance.

use super::PaletteController;
use crate::traits::Positioner;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identifies one editor surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditorId(Uuid);

impl EditorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EditorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Palette controllers keyed by editor, so two editors never share a session.
#[derive(Debug, Clone)]
pub struct PaletteSessions<P: Positioner> {
    sessions: HashMap<EditorId, PaletteController<P>>,
}

impl<P: Positioner> Default for PaletteSessions<P> {
    fn default() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }
}

impl<P: Positioner> PaletteSessions<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller for `editor`, replacing (and detaching) any previous one.
    pub fn attach(&mut self, editor: EditorId, controller: PaletteController<P>) {
        if let Some(mut previous) = self.sessions.insert(editor, controller) {
            previous.detach();
        }
        log::debug!("Palette attached to editor {}", editor);
    }

    pub fn get(&self, editor: EditorId) -> Option<&PaletteController<P>> {
        self.sessions.get(&editor)
    }

    pub fn get_mut(&mut self, editor: EditorId) -> Option<&mut PaletteController<P>> {
        self.sessions.get_mut(&editor)
    }

    /// Tear down and drop the controller of `editor`.
    pub fn detach(&mut self, editor: EditorId) -> Option<PaletteController<P>> {
        let mut controller = self.sessions.remove(&editor)?;
        controller.detach();
        log::debug!("Palette detached from editor {}", editor);
        Some(controller)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{CloseReason, PaletteEvent};
    use crate::model::CommandRegistry;
    use crate::traits::NoOpPositioner;

    #[test]
    fn test_editor_ids_are_unique() {
        assert_ne!(EditorId::new(), EditorId::new());
    }

    #[test]
    fn test_attach_and_detach() {
        let mut sessions = PaletteSessions::new();
        let a = EditorId::new();
        let b = EditorId::new();
        sessions.attach(a, PaletteController::new(CommandRegistry::default(), NoOpPositioner));
        sessions.attach(b, PaletteController::new(CommandRegistry::default(), NoOpPositioner));
        assert_eq!(sessions.len(), 2);

        let detached = sessions.detach(a);
        assert!(detached.is_some());
        assert!(sessions.get(a).is_none());
        assert!(sessions.get(b).is_some());
        assert!(sessions.detach(a).is_none());
    }

    #[test]
    fn test_detach_closes_open_session() {
        let mut sessions = PaletteSessions::new();
        let id = EditorId::new();
        let mut controller = PaletteController::new(CommandRegistry::default(), NoOpPositioner);
        controller.force_open(0);
        sessions.attach(id, controller);

        let mut detached = sessions.detach(id).expect("controller was attached");
        assert!(!detached.is_open());
        assert!(detached.take_events().contains(&PaletteEvent::Closed {
            reason: CloseReason::Detached
        }));
    }
}
