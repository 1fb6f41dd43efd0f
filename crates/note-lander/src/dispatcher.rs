//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware
//! chain, it uses the Dispatcher. The store drains the queued actions after the
//! current one has been reduced, in the order they were dispatched.
//!
//! This enables patterns like:
//! - a raw key press becoming `Palette(Key(Enter))` while the palette is open
//! - `Global(Save)` writing the note and then dispatching `Global(Saved(..))`

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
