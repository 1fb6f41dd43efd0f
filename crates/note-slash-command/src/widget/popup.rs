//! Terminal positioner: remembers where the palette should appear and
//! computes the on-screen rectangle for it.

use crate::traits::{AnchorRect, Positioner};
use ratatui::layout::Rect;

/// [`Positioner`] for ratatui hosts.
///
/// The controller drives `show`/`update_position`/`hide`; the renderer asks
/// for [`popup_area`](AnchoredPopup::popup_area) each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchoredPopup {
    anchor: Option<AnchorRect>,
}

impl AnchoredPopup {
    pub fn is_visible(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<AnchorRect> {
        self.anchor
    }

    /// Rectangle of a `width` x `height` menu inside `bounds`.
    ///
    /// Placed below the anchor, starting at its left edge. Flips above the
    /// anchor when there is not enough room below, and shifts left to stay
    /// inside `bounds`. `None` while hidden.
    pub fn popup_area(&self, width: u16, height: u16, bounds: Rect) -> Option<Rect> {
        let anchor = self.anchor?;
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);

        let space_below = bounds.bottom().saturating_sub(anchor.bottom());
        let space_above = anchor.y.saturating_sub(bounds.y);
        let y = if space_below >= height || space_below >= space_above {
            anchor.bottom().min(bounds.bottom().saturating_sub(height))
        } else {
            anchor.y.saturating_sub(height).max(bounds.y)
        };

        let x = anchor
            .x
            .max(bounds.x)
            .min(bounds.right().saturating_sub(width));

        Some(Rect::new(x, y, width, height))
    }
}

impl Positioner for AnchoredPopup {
    fn show(&mut self, anchor: AnchorRect) {
        self.anchor = Some(anchor);
    }

    fn update_position(&mut self, anchor: AnchorRect) {
        if self.anchor.is_some() {
            self.anchor = Some(anchor);
        }
    }

    fn hide(&mut self) {
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ScreenPoint;

    fn shown_at(x: u16, y: u16) -> AnchoredPopup {
        let mut popup = AnchoredPopup::default();
        popup.show(AnchorRect::caret(ScreenPoint::new(x, y)));
        popup
    }

    #[test]
    fn test_hidden_has_no_area() {
        let popup = AnchoredPopup::default();
        assert!(!popup.is_visible());
        assert_eq!(popup.popup_area(30, 10, Rect::new(0, 0, 80, 24)), None);
    }

    #[test]
    fn test_placed_below_anchor() {
        let popup = shown_at(4, 2);
        assert_eq!(
            popup.popup_area(30, 10, Rect::new(0, 0, 80, 24)),
            Some(Rect::new(4, 3, 30, 10))
        );
    }

    #[test]
    fn test_flips_above_when_no_room() {
        let popup = shown_at(4, 20);
        assert_eq!(
            popup.popup_area(30, 10, Rect::new(0, 0, 80, 24)),
            Some(Rect::new(4, 10, 30, 10))
        );
    }

    #[test]
    fn test_shifts_left_at_right_edge() {
        let popup = shown_at(70, 2);
        assert_eq!(
            popup.popup_area(30, 10, Rect::new(0, 0, 80, 24)),
            Some(Rect::new(50, 3, 30, 10))
        );
    }

    #[test]
    fn test_update_ignored_while_hidden() {
        let mut popup = AnchoredPopup::default();
        popup.update_position(AnchorRect::caret(ScreenPoint::new(1, 1)));
        assert!(!popup.is_visible());

        let mut popup = shown_at(1, 1);
        popup.update_position(AnchorRect::caret(ScreenPoint::new(5, 6)));
        assert_eq!(popup.anchor().map(|a| (a.x, a.y)), Some((5, 6)));
        popup.hide();
        assert!(!popup.is_visible());
    }
}
