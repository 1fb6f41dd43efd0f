//! Trait for whatever places the palette menu on screen.

use super::ScreenPoint;

/// Reference rectangle the menu is placed against (a zero-width caret box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl AnchorRect {
    /// A one-row, zero-width rectangle at `point`.
    pub fn caret(point: ScreenPoint) -> Self {
        Self {
            x: point.x,
            y: point.y,
            width: 0,
            height: 1,
        }
    }

    /// First row below the rectangle.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

/// Positioning capability for the palette menu.
///
/// Any positioning engine implements this; the controller calls `show` once
/// per session, `update_position` on every query change and `hide` on
/// teardown.
pub trait Positioner {
    /// Make the menu visible next to `anchor`.
    fn show(&mut self, anchor: AnchorRect);

    /// Move the visible menu next to `anchor`.
    fn update_position(&mut self, anchor: AnchorRect);

    /// Hide the menu and release anything held for it.
    fn hide(&mut self);
}

/// A positioner for hosts that render the palette some other way.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpPositioner;

impl Positioner for NoOpPositioner {
    fn show(&mut self, _anchor: AnchorRect) {}

    fn update_position(&mut self, _anchor: AnchorRect) {}

    fn hide(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_rect() {
        let rect = AnchorRect::caret(ScreenPoint::new(4, 7));
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 1);
        assert_eq!(rect.bottom(), 8);
    }
}
