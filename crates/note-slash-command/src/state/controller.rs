//! Palette controller
//!
//! Owns one palette session for one editor: runs the trigger detector on every
//! document change, keeps the filtered list and highlighted row in sync with
//! the query, intercepts the palette keys and performs the commit and cleanup
//! sequences against the [`DocumentModel`].

use super::selection::SelectionIndex;
use super::trigger::{detect, TeardownCause, TriggerDecision, TriggerState};
use super::view::{window_start, PaletteRow, PaletteView};
use crate::action::PaletteKey;
use crate::error::PaletteError;
use crate::event::{CloseReason, PaletteEvent};
use crate::model::{Command, CommandRegistry, FilteredList};
use crate::traits::{AnchorRect, DocumentError, DocumentModel, Positioner, ScreenPoint};

impl From<TeardownCause> for CloseReason {
    fn from(cause: TeardownCause) -> Self {
        match cause {
            TeardownCause::RangeSelection => CloseReason::RangeSelection,
            TeardownCause::TriggerDeleted => CloseReason::TriggerDeleted,
            TeardownCause::TriggerLost => CloseReason::TriggerLost,
        }
    }
}

/// Slash palette for one editor instance.
#[derive(Debug, Clone)]
pub struct PaletteController<P: Positioner> {
    registry: CommandRegistry,
    trigger: TriggerState,
    filtered: FilteredList,
    selection: SelectionIndex,
    positioner: P,
    events: Vec<PaletteEvent>,
}

impl<P: Positioner> PaletteController<P> {
    pub fn new(registry: CommandRegistry, positioner: P) -> Self {
        let filtered = registry.filter("");
        Self {
            registry,
            trigger: TriggerState::default(),
            filtered,
            selection: SelectionIndex::default(),
            positioner,
            events: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.trigger.is_active()
    }

    pub fn query(&self) -> &str {
        self.trigger.query()
    }

    pub fn anchor(&self) -> Option<usize> {
        self.trigger.anchor()
    }

    pub fn filtered(&self) -> &FilteredList {
        &self.filtered
    }

    pub fn selected_index(&self) -> usize {
        self.selection.get()
    }

    /// The highlighted command while the palette is open
    pub fn selected_command(&self) -> Option<&Command> {
        if !self.is_open() {
            return None;
        }
        self.selection.current(&self.filtered)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn positioner(&self) -> &P {
        &self.positioner
    }

    pub fn positioner_mut(&mut self) -> &mut P {
        &mut self.positioner
    }

    /// Swap the command set (e.g. after a locale change), refiltering an open session.
    pub fn set_registry(&mut self, registry: CommandRegistry) {
        self.registry = registry;
        self.filtered = self.registry.filter(self.trigger.query());
        self.selection.clamp(self.filtered.len());
    }

    /// Drain the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<PaletteEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run trigger detection after a content or selection change.
    ///
    /// Safe to call for both notifications of the same edit.
    pub fn handle_document_change<D: DocumentModel + ?Sized>(&mut self, doc: &D) {
        let snapshot = doc.snapshot();
        match detect(&self.trigger, &snapshot) {
            TriggerDecision::Ignore => {}
            TriggerDecision::Start { anchor, query } => {
                if self.is_open() {
                    self.teardown(CloseReason::Superseded);
                }
                self.open(anchor, query, doc);
            }
            TriggerDecision::Update { query } => self.update(query, doc),
            TriggerDecision::Teardown(cause) => self.teardown(cause.into()),
        }
    }

    /// Handle a palette key.
    ///
    /// Returns `true` if the key was consumed. While the palette is closed
    /// nothing is consumed.
    pub fn handle_key<D: DocumentModel + ?Sized>(&mut self, key: PaletteKey, doc: &mut D) -> bool {
        if !self.is_open() {
            return false;
        }

        match key {
            PaletteKey::ArrowUp => self.selection.move_up(self.filtered.len()),
            PaletteKey::ArrowDown => self.selection.move_down(self.filtered.len()),
            PaletteKey::Enter | PaletteKey::Tab => {
                // Nothing highlighted: swallow the key, keep the session
                if let Some(command) = self.selection.current(&self.filtered).cloned() {
                    self.commit(command, doc);
                }
            }
            PaletteKey::Escape => self.dismiss(CloseReason::Escape, doc),
        }
        true
    }

    /// Commit the visible command titled `title` (pointer selection).
    ///
    /// Returns `false` if the palette is closed or the title is not in the
    /// filtered list.
    pub fn select<D: DocumentModel + ?Sized>(&mut self, title: &str, doc: &mut D) -> bool {
        match self.filtered.position(title) {
            Some(index) => self.select_index(index, doc),
            None => false,
        }
    }

    /// Commit the command at `index` of the filtered list.
    pub fn select_index<D: DocumentModel + ?Sized>(&mut self, index: usize, doc: &mut D) -> bool {
        if !self.is_open() || !self.selection.set(index, self.filtered.len()) {
            return false;
        }
        match self.selection.current(&self.filtered).cloned() {
            Some(command) => {
                self.commit(command, doc);
                true
            }
            None => false,
        }
    }

    /// Pointer or focus interaction outside the palette.
    ///
    /// Removes the typed trigger text and closes. Returns `false` if the
    /// palette was not open.
    pub fn handle_outside_interaction<D: DocumentModel + ?Sized>(&mut self, doc: &mut D) -> bool {
        if !self.is_open() {
            return false;
        }
        self.dismiss(CloseReason::OutsideInteraction, doc);
        true
    }

    /// The editor instance is going away; close without touching the document.
    pub fn detach(&mut self) {
        if self.is_open() {
            self.teardown(CloseReason::Detached);
        }
    }

    /// Snapshot for rendering, with at most `max_rows` rows. `None` while closed.
    pub fn view(&self, max_rows: usize) -> Option<PaletteView> {
        if !self.is_open() {
            return None;
        }

        let total = self.filtered.len();
        let selected = self.selection.get();
        let first_visible = window_start(selected, total, max_rows);
        let take = if max_rows == 0 { total } else { max_rows };

        let rows = self
            .filtered
            .iter()
            .enumerate()
            .skip(first_visible)
            .take(take)
            .map(|(index, command)| PaletteRow {
                title: command.title.clone(),
                icon: command.icon,
                shortcut_hint: command.shortcut_hint.clone(),
                is_selected: index == selected,
            })
            .collect();

        Some(PaletteView {
            query: self.trigger.query().to_string(),
            rows,
            total_matches: total,
            first_visible,
            show_placeholder: self.trigger.query().is_empty(),
            no_results: total == 0,
        })
    }

    fn open<D: DocumentModel + ?Sized>(&mut self, anchor: usize, query: String, doc: &D) {
        log::debug!("Palette opened at offset {} with query {:?}", anchor, query);
        self.filtered = self.registry.filter(&query);
        self.selection.reset();
        self.trigger.activate(anchor, query.clone());
        self.positioner.show(anchor_rect(doc, anchor));
        self.events.push(PaletteEvent::Opened { anchor, query });
    }

    fn update<D: DocumentModel + ?Sized>(&mut self, query: String, doc: &D) {
        if query != self.trigger.query() {
            self.filtered = self.registry.filter(&query);
            self.selection.clamp(self.filtered.len());
            self.trigger.set_query(query.clone());
            log::trace!("Palette query {:?} matches {}", query, self.filtered.len());
            self.events.push(PaletteEvent::QueryChanged {
                query,
                matches: self.filtered.len(),
            });
        }

        // The line may have reflowed, follow the caret
        if let Some(anchor) = self.trigger.anchor() {
            self.positioner.update_position(caret_rect(doc, anchor));
        }
    }

    fn commit<D: DocumentModel + ?Sized>(&mut self, command: Command, doc: &mut D) {
        let Some(anchor) = self.trigger.anchor() else {
            return;
        };

        if let Err(source) = doc.apply_command(&command.action) {
            let err = PaletteError::CommandFailed {
                title: command.title,
                source,
            };
            log::error!("{}", err);
            self.teardown(CloseReason::CommandFailed);
            return;
        }

        doc.focus();
        remove_trigger_text(doc, anchor);
        log::debug!("Palette committed '{}'", command.title);
        self.events.push(PaletteEvent::Committed {
            title: command.title,
        });
        self.teardown(CloseReason::Committed);
    }

    fn dismiss<D: DocumentModel + ?Sized>(&mut self, reason: CloseReason, doc: &mut D) {
        if let Some(anchor) = self.trigger.anchor() {
            remove_trigger_text(doc, anchor);
        }
        self.teardown(reason);
    }

    fn teardown(&mut self, reason: CloseReason) {
        if !self.is_open() {
            return;
        }
        self.positioner.hide();
        self.trigger.reset();
        self.selection.reset();
        self.filtered = self.registry.filter("");
        log::debug!("Palette closed: {:?}", reason);
        self.events.push(PaletteEvent::Closed { reason });
    }

    #[cfg(test)]
    pub(crate) fn force_open(&mut self, anchor: usize) {
        self.trigger.activate(anchor, String::new());
        self.filtered = self.registry.filter("");
    }
}

/// Delete `anchor..cursor`, the `/` plus the typed query.
fn remove_trigger_text<D: DocumentModel + ?Sized>(doc: &mut D, anchor: usize) {
    let cursor = doc.cursor_offset();
    if !doc.is_valid_offset(anchor) || cursor <= anchor {
        log::warn!("{}", PaletteError::StaleAnchor { anchor, cursor });
        return;
    }
    if let Err(err) = doc.delete_range(anchor, cursor) {
        log::warn!("Failed to remove trigger text: {}", err);
    }
}

/// Screen rectangle of the trigger, falling back to the caret and then to
/// just below the top-left corner of the editing surface.
fn anchor_rect<D: DocumentModel + ?Sized>(doc: &D, anchor: usize) -> AnchorRect {
    resolve_rect(doc, doc.coordinates_at(anchor), "caret", || {
        doc.cursor_coordinates()
    })
}

/// Screen rectangle of the caret, falling back to the trigger and then to the
/// viewport origin.
fn caret_rect<D: DocumentModel + ?Sized>(doc: &D, anchor: usize) -> AnchorRect {
    resolve_rect(doc, doc.cursor_coordinates(), "trigger", || {
        doc.coordinates_at(anchor)
    })
}

fn resolve_rect<D, F>(
    doc: &D,
    primary: Result<ScreenPoint, DocumentError>,
    fallback_name: &str,
    fallback: F,
) -> AnchorRect
where
    D: DocumentModel + ?Sized,
    F: FnOnce() -> Result<ScreenPoint, DocumentError>,
{
    let point = primary
        .or_else(|err| {
            log::warn!("{}, using {}", PaletteError::Positioning(err), fallback_name);
            fallback()
        })
        .unwrap_or_else(|err| {
            log::warn!("{}, using viewport origin", PaletteError::Positioning(err));
            let origin = doc.viewport_origin();
            ScreenPoint::new(origin.x, origin.y.saturating_add(1))
        });
    AnchorRect::caret(point)
}
