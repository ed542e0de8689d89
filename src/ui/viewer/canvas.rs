// SPDX-License-Identifier: MPL-2.0
//! Scrollable canvas: turns pointer and wheel input into scroll offset and
//! scale changes over the viewer surface.
//!
//! Every handler reports whether it consumed the event
//! ([`Status::Captured`]) or let it propagate ([`Status::Ignored`]).

use crate::config::{WHEEL_DELTA_PER_LINE, WHEEL_ZOOM_SENSITIVITY};
use crate::ui::state::{PanState, ViewTransform, ViewportState};
use iced::event::Status;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::{mouse, Point, Rectangle, Size};

/// Interaction and transform state of the viewer canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    pan: PanState,
    transform: ViewTransform,
    viewport: ViewportState,
    /// Natural size of the surface content in pixels.
    content_width: u32,
    content_height: u32,
}

impl Canvas {
    /// Creates a canvas bound to content of the given natural size.
    #[must_use]
    pub fn new(content_width: u32, content_height: u32) -> Self {
        Self {
            pan: PanState::default(),
            transform: ViewTransform::default(),
            viewport: ViewportState::default(),
            content_width,
            content_height,
        }
    }

    /// Handles a left-button press at `position` (window coordinates).
    pub fn on_pointer_down(&mut self, position: Point) -> Status {
        if !self.pan.is_interactive() {
            return Status::Ignored;
        }

        self.pan.press(position, self.viewport.offset);
        tracing::trace!(x = position.x, y = position.y, "pan started");
        Status::Captured
    }

    /// Handles a left-button release.
    pub fn on_pointer_up(&mut self) -> Status {
        if !self.pan.is_interactive() {
            return Status::Ignored;
        }

        self.pan.release();
        Status::Captured
    }

    /// Handles pointer motion while a press is held, scrolling by the inverse
    /// of the distance travelled since the press.
    pub fn on_pointer_move(&mut self, position: Point) -> Status {
        if !self.pan.is_interactive() {
            return Status::Ignored;
        }

        let Some(proposed) = self.pan.offset_for(position) else {
            return Status::Ignored;
        };

        let content = self.scaled_size();
        self.viewport.scroll_to(proposed, content);
        Status::Captured
    }

    /// Handles wheel rotation. `delta` is in eighths of a degree, positive
    /// zooming in. While the container is in fit mode the wheel is left to
    /// the default handling.
    pub fn on_wheel(&mut self, delta: f32, fit_mode: bool) -> Status {
        if fit_mode {
            return Status::Ignored;
        }

        let factor = 1.0 + delta * WHEEL_ZOOM_SENSITIVITY;
        self.zoom_by(factor);
        tracing::trace!(delta, scale = self.transform.scale(), "wheel zoom");
        Status::Captured
    }

    /// Multiplies the scale by `factor`, keeping the viewport centre anchored.
    pub fn zoom_by(&mut self, factor: f32) {
        let center = self.viewport.center();
        self.transform.scale_by(factor);

        if let (Some((cx, cy)), Some(viewport)) = (center, self.viewport.size()) {
            let anchored = AbsoluteOffset {
                x: cx * factor - viewport.width / 2.0,
                y: cy * factor - viewport.height / 2.0,
            };
            let content = self.scaled_size();
            self.viewport.scroll_to(anchored, content);
        }
    }

    /// Replaces the scale outright and scrolls back to the origin.
    pub fn set_scale(&mut self, scale: f32) {
        self.transform.set_scale(scale);
        self.viewport.reset_offset();
    }

    /// Records new viewport bounds and re-clamps the offset. Returns true if the
    /// viewport size changed.
    pub fn set_viewport(&mut self, bounds: Rectangle) -> bool {
        let changed = self.viewport.set_bounds(bounds);
        let content = self.scaled_size();
        self.viewport.scroll_to(self.viewport.offset, content);
        changed
    }

    /// Adopts an offset reported by the scrollable itself.
    pub fn sync_offset(&mut self, offset: AbsoluteOffset) {
        let content = self.scaled_size();
        self.viewport.scroll_to(offset, content);
    }

    pub(crate) fn set_interactive(&mut self, interactive: bool) {
        self.pan.set_interactive(interactive);
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.pan.is_interactive()
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_interactive() && self.pan.is_pressed()
    }

    /// Cursor to show over the canvas: a closed hand while panning.
    #[must_use]
    pub fn mouse_interaction(&self) -> mouse::Interaction {
        if self.is_panning() {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::default()
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.transform.scale()
    }

    #[must_use]
    pub fn offset(&self) -> AbsoluteOffset {
        self.viewport.offset
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Content size under the current transform.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        self.transform.scaled_size(self.content_width, self.content_height)
    }

    /// Current offset as a fraction of the scrollable range.
    #[must_use]
    pub fn relative_offset(&self) -> RelativeOffset {
        self.viewport.relative_offset(self.scaled_size())
    }
}

/// Converts iced wheel deltas into eighths of a degree (120 per notch).
#[must_use]
pub fn wheel_delta(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y * WHEEL_DELTA_PER_LINE,
        mouse::ScrollDelta::Pixels { y, .. } => *y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn canvas_in_viewport(content: (u32, u32), viewport: (f32, f32)) -> Canvas {
        let mut canvas = Canvas::new(content.0, content.1);
        canvas.set_viewport(Rectangle::new(
            Point::ORIGIN,
            Size::new(viewport.0, viewport.1),
        ));
        canvas
    }

    #[test]
    fn drag_scrolls_by_inverse_delta() {
        let mut canvas = canvas_in_viewport((1000, 1000), (200.0, 200.0));
        canvas.sync_offset(AbsoluteOffset { x: 300.0, y: 300.0 });

        assert_eq!(canvas.on_pointer_down(Point::new(50.0, 50.0)), Status::Captured);
        canvas.on_pointer_move(Point::new(60.0, 40.0));
        assert_eq!(
            canvas.on_pointer_move(Point::new(80.0, 20.0)),
            Status::Captured
        );

        // Only the last position matters: delta = (30, -30).
        assert_abs_diff_eq!(canvas.offset().x, 270.0);
        assert_abs_diff_eq!(canvas.offset().y, 330.0);

        assert_eq!(canvas.on_pointer_up(), Status::Captured);
    }

    #[test]
    fn drag_is_clamped_to_scroll_range() {
        let mut canvas = canvas_in_viewport((1000, 500), (200.0, 200.0));

        canvas.on_pointer_down(Point::new(100.0, 100.0));
        canvas.on_pointer_move(Point::new(-5000.0, -5000.0));

        assert_abs_diff_eq!(canvas.offset().x, 800.0);
        assert_abs_diff_eq!(canvas.offset().y, 300.0);

        canvas.on_pointer_move(Point::new(5000.0, 5000.0));
        assert_abs_diff_eq!(canvas.offset().x, 0.0);
        assert_abs_diff_eq!(canvas.offset().y, 0.0);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut canvas = canvas_in_viewport((1000, 1000), (200.0, 200.0));
        assert_eq!(
            canvas.on_pointer_move(Point::new(10.0, 10.0)),
            Status::Ignored
        );

        canvas.on_pointer_down(Point::new(0.0, 0.0));
        canvas.on_pointer_up();
        assert_eq!(
            canvas.on_pointer_move(Point::new(10.0, 10.0)),
            Status::Ignored
        );
        assert_abs_diff_eq!(canvas.offset().x, 0.0);
    }

    #[test]
    fn non_interactive_canvas_ignores_pointer_events() {
        let mut canvas = canvas_in_viewport((1000, 1000), (200.0, 200.0));
        canvas.set_interactive(false);

        assert_eq!(canvas.on_pointer_down(Point::new(0.0, 0.0)), Status::Ignored);
        assert_eq!(
            canvas.on_pointer_move(Point::new(-50.0, -50.0)),
            Status::Ignored
        );
        assert_eq!(canvas.on_pointer_up(), Status::Ignored);
        assert_abs_diff_eq!(canvas.offset().x, 0.0);
        assert!(!canvas.is_panning());
    }

    #[test]
    fn cursor_is_closed_hand_only_while_pressed() {
        let mut canvas = Canvas::new(10, 10);
        assert_eq!(canvas.mouse_interaction(), mouse::Interaction::default());

        canvas.on_pointer_down(Point::new(1.0, 1.0));
        assert_eq!(canvas.mouse_interaction(), mouse::Interaction::Grabbing);

        canvas.on_pointer_up();
        assert_eq!(canvas.mouse_interaction(), mouse::Interaction::default());
    }

    #[test]
    fn wheel_multiplies_scale() {
        let mut canvas = Canvas::new(100, 100);

        assert_eq!(canvas.on_wheel(100.0, false), Status::Captured);
        assert_eq!(canvas.on_wheel(100.0, false), Status::Captured);

        assert_abs_diff_eq!(canvas.scale(), 1.21, epsilon = 1e-6);
    }

    #[test]
    fn wheel_out_and_in_compose() {
        let mut canvas = Canvas::new(100, 100);
        canvas.on_wheel(-120.0, false);
        canvas.on_wheel(240.0, false);
        assert_abs_diff_eq!(canvas.scale(), 0.88 * 1.24, epsilon = 1e-6);
    }

    #[test]
    fn wheel_in_fit_mode_is_ignored() {
        let mut canvas = Canvas::new(100, 100);
        assert_eq!(canvas.on_wheel(100.0, true), Status::Ignored);
        assert_abs_diff_eq!(canvas.scale(), 1.0);
    }

    #[test]
    fn wheel_zoom_is_unbounded() {
        // No floor is applied: a -1000 delta collapses the scale to zero.
        let mut canvas = Canvas::new(100, 100);
        canvas.on_wheel(-1000.0, false);
        assert_abs_diff_eq!(canvas.scale(), 0.0);

        let mut canvas = Canvas::new(100, 100);
        for _ in 0..50 {
            canvas.on_wheel(120.0, false);
        }
        assert!(canvas.scale() > 250.0);
    }

    #[test]
    fn overshooting_zoom_out_can_zoom_back_in() {
        let mut canvas = Canvas::new(100, 100);
        canvas.on_wheel(-1200.0, false);
        assert_abs_diff_eq!(canvas.scale(), -0.2, epsilon = 1e-6);
        assert_abs_diff_eq!(canvas.scaled_size().width, 20.0, epsilon = 1e-4);

        let mut previous = canvas.scaled_size().width;
        for _ in 0..10 {
            canvas.on_wheel(120.0, false);
            let width = canvas.scaled_size().width;
            assert!(width > previous);
            previous = width;
        }
        assert!(previous > 60.0);
    }

    #[test]
    fn zoom_keeps_viewport_centre_anchored() {
        let mut canvas = canvas_in_viewport((1000, 1000), (200.0, 200.0));
        canvas.sync_offset(AbsoluteOffset { x: 400.0, y: 400.0 });

        // Centre at (500, 500) becomes (1000, 1000) after doubling.
        canvas.zoom_by(2.0);

        assert_abs_diff_eq!(canvas.offset().x, 900.0);
        assert_abs_diff_eq!(canvas.offset().y, 900.0);
    }

    #[test]
    fn wheel_delta_normalizes_lines_and_pixels() {
        assert_abs_diff_eq!(
            wheel_delta(&mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }),
            120.0
        );
        assert_abs_diff_eq!(
            wheel_delta(&mouse::ScrollDelta::Pixels { x: 0.0, y: -35.0 }),
            -35.0
        );
    }

    #[test]
    fn shrinking_viewport_reclamps_offset() {
        let mut canvas = canvas_in_viewport((1000, 1000), (200.0, 200.0));
        canvas.sync_offset(AbsoluteOffset { x: 800.0, y: 800.0 });

        canvas.set_viewport(Rectangle::new(Point::ORIGIN, Size::new(500.0, 500.0)));

        assert_abs_diff_eq!(canvas.offset().x, 500.0);
        assert_abs_diff_eq!(canvas.offset().y, 500.0);
    }
}
