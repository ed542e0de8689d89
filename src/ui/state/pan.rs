// SPDX-License-Identifier: MPL-2.0
//! Pan interaction state
//!
//! Tracks whether click-drag panning is permitted and, while the pointer is
//! held down, where the press started and which scroll offset was current then.

use iced::widget::scrollable::AbsoluteOffset;
use iced::Point;

/// Canvas interaction state.
///
/// `press_origin` and `press_offset` are always set and cleared together.
#[derive(Debug, Clone)]
pub struct PanState {
    interactive: bool,

    /// Pointer position at pointer-down.
    press_origin: Option<Point>,

    /// Scroll offset at pointer-down.
    press_offset: Option<AbsoluteOffset>,
}

impl Default for PanState {
    fn default() -> Self {
        Self {
            interactive: true,
            press_origin: None,
            press_offset: None,
        }
    }
}

impl PanState {
    /// Whether pointer events are handled by the canvas.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Enables or disables panning. Disabling drops any press in progress.
    pub(crate) fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
        if !interactive {
            self.release();
        }
    }

    /// Records a pointer press.
    pub fn press(&mut self, position: Point, offset: AbsoluteOffset) {
        self.press_origin = Some(position);
        self.press_offset = Some(offset);
    }

    /// Forgets the current press.
    pub fn release(&mut self) {
        self.press_origin = None;
        self.press_offset = None;
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    #[cfg(test)]
    pub(crate) fn press_origin(&self) -> Option<Point> {
        self.press_origin
    }

    #[cfg(test)]
    pub(crate) fn press_offset(&self) -> Option<AbsoluteOffset> {
        self.press_offset
    }

    /// Calculates the scroll offset for the current pointer position.
    ///
    /// The direction is inverted: moving the pointer right scrolls left, so the
    /// content follows the pointer. The result is not clamped.
    #[must_use]
    pub fn offset_for(&self, position: Point) -> Option<AbsoluteOffset> {
        let origin = self.press_origin?;
        let offset = self.press_offset?;

        Some(AbsoluteOffset {
            x: offset.x - (position.x - origin.x),
            y: offset.y - (position.y - origin.y),
        })
    }
}
