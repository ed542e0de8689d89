// SPDX-License-Identifier: MPL-2.0
//! Wheel gate around the viewer scrollable.
//!
//! While the canvas zooms with the wheel, the scrollable underneath must not
//! scroll on the same event. Closing the gate keeps wheel input out of the
//! wrapped widget; everything else (presses, motion, `snap_to` operations)
//! still reaches it.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

pub struct WheelGate<'a, Message, Theme, Renderer> {
    inner: Element<'a, Message, Theme, Renderer>,
    closed: bool,
}

impl<'a, Message, Theme, Renderer> WheelGate<'a, Message, Theme, Renderer> {
    /// Wraps `inner` with the gate open.
    pub fn new(inner: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            inner: inner.into(),
            closed: false,
        }
    }

    #[must_use]
    pub fn closed(self, closed: bool) -> Self {
        Self { closed, ..self }
    }

    /// Whether `event` is kept away from the wrapped widget.
    fn withholds(&self, event: &Event) -> bool {
        self.closed && matches!(event, Event::Mouse(mouse::Event::WheelScrolled { .. }))
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for WheelGate<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.inner.as_widget().size()
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.inner)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.inner]);
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let child = &mut tree.children[0];
        self.inner.as_widget_mut().layout(child, renderer, limits)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.withholds(event) {
            return;
        }

        let child = &mut tree.children[0];
        self.inner.as_widget_mut().update(
            child,
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let child = &tree.children[0];
        self.inner
            .as_widget()
            .draw(child, renderer, theme, style, layout, cursor, viewport);
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let child = &tree.children[0];
        self.inner
            .as_widget()
            .mouse_interaction(child, layout, cursor, viewport, renderer)
    }

    // Scrollable operations such as `snap_to` must reach the wrapped widget.
    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        let child = &mut tree.children[0];
        self.inner
            .as_widget_mut()
            .operate(child, layout, renderer, operation);
    }
}

impl<'a, Message, Theme, Renderer> From<WheelGate<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(gate: WheelGate<'a, Message, Theme, Renderer>) -> Self {
        Element::new(gate)
    }
}

/// Wraps `inner` in an open [`WheelGate`].
pub fn wheel_gate<'a, Message, Theme, Renderer>(
    inner: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> WheelGate<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    WheelGate::new(inner)
}
