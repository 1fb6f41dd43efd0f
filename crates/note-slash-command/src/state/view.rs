//! Render-ready snapshot of an open palette.

use crate::model::IconRef;

/// One visible row of the palette list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRow {
    pub title: String,
    pub icon: IconRef,
    pub shortcut_hint: Option<String>,
    pub is_selected: bool,
}

/// Everything a renderer needs to draw the palette.
///
/// `rows` is a window of at most `max_rows` entries that always contains the
/// highlighted row; `first_visible` is the list index of `rows[0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteView {
    pub query: String,
    pub rows: Vec<PaletteRow>,
    pub total_matches: usize,
    pub first_visible: usize,
    /// The query is empty, so the placeholder hint is shown.
    pub show_placeholder: bool,
    /// Nothing matches; the "no options" text is shown instead of rows.
    pub no_results: bool,
}

/// First list index of a window of `max_rows` rows that keeps `selected` visible.
pub(crate) fn window_start(selected: usize, total: usize, max_rows: usize) -> usize {
    if max_rows == 0 || total <= max_rows {
        return 0;
    }
    if selected < max_rows {
        0
    } else {
        (selected + 1 - max_rows).min(total - max_rows)
    }
}
