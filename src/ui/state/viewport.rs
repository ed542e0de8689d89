// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Handles the visible area bounds and the scroll offset over the scaled content.

use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::{Point, Rectangle, Size};

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Window-space bounds of the visible area, once known
    pub bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
        }
    }
}

impl ViewportState {
    /// Records new viewport bounds. Returns true if the size differs from the previous one.
    pub fn set_bounds(&mut self, bounds: Rectangle) -> bool {
        let changed = self.size() != Some(bounds.size());
        self.bounds = Some(bounds);
        changed
    }

    /// Size of the visible area, once known.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.bounds.map(|bounds| bounds.size())
    }

    /// Whether a window-space point lies inside the viewport.
    ///
    /// Unknown bounds count as a hit so the viewer stays usable before the
    /// first layout pass reports them.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.is_none_or(|bounds| bounds.contains(point))
    }

    /// Resets the scroll offset to the origin.
    pub fn reset_offset(&mut self) {
        self.offset = AbsoluteOffset { x: 0.0, y: 0.0 };
    }

    /// Largest valid offset on each axis for content of the given size.
    #[must_use]
    pub fn max_offset(&self, content: Size) -> AbsoluteOffset {
        match self.size() {
            Some(viewport) => AbsoluteOffset {
                x: (content.width - viewport.width).max(0.0),
                y: (content.height - viewport.height).max(0.0),
            },
            None => AbsoluteOffset { x: 0.0, y: 0.0 },
        }
    }

    /// Clamps an offset to the scrollable range of the content, the same way
    /// a scrollbar does.
    #[must_use]
    pub fn clamp(&self, offset: AbsoluteOffset, content: Size) -> AbsoluteOffset {
        let max = self.max_offset(content);
        AbsoluteOffset {
            x: offset.x.clamp(0.0, max.x),
            y: offset.y.clamp(0.0, max.y),
        }
    }

    /// Clamps and stores an offset, returning the value actually applied.
    pub fn scroll_to(&mut self, offset: AbsoluteOffset, content: Size) -> AbsoluteOffset {
        self.offset = self.clamp(offset, content);
        self.offset
    }

    /// Current offset expressed relative to the scrollable range (0.0–1.0).
    #[must_use]
    pub fn relative_offset(&self, content: Size) -> RelativeOffset {
        let max = self.max_offset(content);
        RelativeOffset {
            x: if max.x > 0.0 { self.offset.x / max.x } else { 0.0 },
            y: if max.y > 0.0 { self.offset.y / max.y } else { 0.0 },
        }
    }

    /// Viewport centre in content coordinates.
    #[must_use]
    pub fn center(&self) -> Option<(f32, f32)> {
        let size = self.size()?;
        Some((
            self.offset.x + size.width / 2.0,
            self.offset.y + size.height / 2.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn viewport(width: f32, height: f32) -> ViewportState {
        ViewportState {
            bounds: Some(Rectangle::new(Point::ORIGIN, Size::new(width, height))),
            ..ViewportState::default()
        }
    }

    #[test]
    fn default_viewport_has_zero_offset() {
        let state = ViewportState::default();
        assert_abs_diff_eq!(state.offset.x, 0.0);
        assert_abs_diff_eq!(state.offset.y, 0.0);
        assert!(state.bounds.is_none());
    }

    #[test]
    fn set_bounds_reports_size_changes_only() {
        let mut state = ViewportState::default();
        let size = Size::new(400.0, 300.0);
        assert!(state.set_bounds(Rectangle::new(Point::ORIGIN, size)));
        assert!(!state.set_bounds(Rectangle::new(Point::new(0.0, 40.0), size)));
        assert!(state.set_bounds(Rectangle::new(Point::ORIGIN, Size::new(401.0, 300.0))));
    }

    #[test]
    fn contains_uses_window_space_bounds() {
        let mut state = ViewportState::default();
        assert!(state.contains(Point::new(-5.0, -5.0)));

        state.set_bounds(Rectangle::new(Point::new(0.0, 40.0), Size::new(100.0, 100.0)));
        assert!(state.contains(Point::new(50.0, 60.0)));
        assert!(!state.contains(Point::new(50.0, 20.0)));
    }

    #[test]
    fn clamp_limits_offset_to_content_range() {
        let state = viewport(400.0, 300.0);
        let content = Size::new(800.0, 600.0);

        let clamped = state.clamp(AbsoluteOffset { x: 900.0, y: -20.0 }, content);
        assert_abs_diff_eq!(clamped.x, 400.0);
        assert_abs_diff_eq!(clamped.y, 0.0);
    }

    #[test]
    fn clamp_pins_small_content_to_origin() {
        let state = viewport(400.0, 300.0);
        let clamped = state.clamp(
            AbsoluteOffset { x: 50.0, y: 50.0 },
            Size::new(100.0, 100.0),
        );
        assert_abs_diff_eq!(clamped.x, 0.0);
        assert_abs_diff_eq!(clamped.y, 0.0);
    }

    #[test]
    fn relative_offset_calculates_fraction() {
        let mut state = viewport(400.0, 300.0);
        state.scroll_to(
            AbsoluteOffset { x: 200.0, y: 150.0 },
            Size::new(800.0, 600.0),
        );

        let relative = state.relative_offset(Size::new(800.0, 600.0));
        assert_abs_diff_eq!(relative.x, 0.5);
        assert_abs_diff_eq!(relative.y, 0.5);
    }

    #[test]
    fn center_accounts_for_offset() {
        let mut state = viewport(100.0, 50.0);
        state.offset = AbsoluteOffset { x: 10.0, y: 20.0 };
        assert_eq!(state.center(), Some((60.0, 45.0)));
    }
}
