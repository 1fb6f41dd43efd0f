//! KeyboardMiddleware - translates raw terminal input into editor and palette actions
//!
//! ## Layer 1: Priority keys
//! Ctrl+C / Ctrl+Q (quit) and Ctrl+S (save) work in every state.
//!
//! ## Layer 2: Palette interception
//! While the slash palette is open, ArrowUp, ArrowDown, Enter, Tab and Esc
//! become palette actions and never reach the editor. Every other key falls
//! through, so typing keeps refining the query.
//!
//! ## Layer 3: Editor keys
//! Everything else is text input or caret motion.
//!
//! Mouse clicks are routed the same way: inside the open palette they select a
//! row, outside it they dismiss the palette before moving the caret.

use crate::actions::{Action, EditorAction, GlobalAction, PaletteAction};
use crate::dispatcher::Dispatcher;
use crate::layout::palette_layout;
use crate::middleware::Middleware;
use crate::state::AppState;
use note_slash_command::{DefaultTheme, PaletteKey, SlashPaletteWidget};
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // LAYER 1: Priority keys
        if ctrl {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    log::debug!("Layer 1: Ctrl+{:?} - dispatching Quit", key.code);
                    dispatcher.dispatch(Action::Global(GlobalAction::Quit));
                    return;
                }
                KeyCode::Char('s') => {
                    dispatcher.dispatch(Action::Global(GlobalAction::Save));
                    return;
                }
                _ => {}
            }
        }

        // LAYER 2: Palette interception
        if state.palette_open() && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            if let Some(palette_key) = palette_key(key.code) {
                log::debug!("Layer 2: palette open - routing {}", palette_key);
                dispatcher.dispatch(Action::Palette(PaletteAction::Key(palette_key)));
                return;
            }
        }

        // LAYER 3: Editor keys
        if let Some(action) = editor_action(key) {
            dispatcher.dispatch(Action::Editor(action));
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, state: &AppState, dispatcher: &Dispatcher) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some((area, view)) = palette_layout(state) {
            if area.contains(Position::new(mouse.column, mouse.row)) {
                let row = SlashPaletteWidget::<DefaultTheme>::row_at(
                    area,
                    &view,
                    mouse.column,
                    mouse.row,
                );
                if let Some(index) = row {
                    dispatcher.dispatch(Action::Palette(PaletteAction::SelectRow(index)));
                }
                return;
            }
            dispatcher.dispatch(Action::Palette(PaletteAction::ClickOutside {
                column: mouse.column,
                row: mouse.row,
            }));
            return;
        }

        dispatcher.dispatch(Action::Editor(EditorAction::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }));
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// The palette keys, by terminal key code
fn palette_key(code: KeyCode) -> Option<PaletteKey> {
    let name = match code {
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        KeyCode::Esc => "Escape",
        _ => return None,
    };
    PaletteKey::from_key_name(name)
}

fn editor_action(key: KeyEvent) -> Option<EditorAction> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let action = match key.code {
        KeyCode::Char(c) => EditorAction::InsertChar(c),
        KeyCode::Enter => EditorAction::Newline,
        KeyCode::Backspace => EditorAction::Backspace,
        KeyCode::Delete => EditorAction::Delete,
        KeyCode::Left => EditorAction::MoveLeft { extend: shift },
        KeyCode::Right => EditorAction::MoveRight { extend: shift },
        KeyCode::Up => EditorAction::MoveUp,
        KeyCode::Down => EditorAction::MoveDown,
        KeyCode::Home => EditorAction::Home,
        KeyCode::End => EditorAction::End,
        _ => return None,
    };
    Some(action)
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => {
                self.handle_key(*key, state, dispatcher);
                false
            }
            Action::Global(GlobalAction::Mouse(mouse)) => {
                self.handle_mouse(*mouse, state, dispatcher);
                false
            }
            Action::Global(GlobalAction::FocusLost) => {
                if state.palette_open() {
                    dispatcher.dispatch(Action::Palette(PaletteAction::OutsideInteraction));
                }
                false
            }
            _ => true,
        }
    }
}
