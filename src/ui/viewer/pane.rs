// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the surface inside the scrollable canvas with the
//! configured background and the pan cursor.

use crate::config::BackgroundTheme;
use crate::ui::theme;
use crate::ui::viewer::component::Message;
use crate::ui::viewer::surface::Surface;
use crate::ui::widgets::wheel_gate;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{mouse_area, responsive, Container, Id, Image, Scrollable};
use iced::{mouse, Element, Length, Padding, Size};

pub struct ViewContext {
    pub background: BackgroundTheme,
    pub scrollable_id: &'static str,
}

pub struct ViewModel<'a> {
    pub surface: &'a Surface,
    /// Size of the surface content under the current scale.
    pub scaled_size: Size,
    /// Whether the wheel zooms (and must not scroll the canvas).
    pub wheel_zooms: bool,
    pub cursor: mouse::Interaction,
}

pub fn view<'a>(ctx: ViewContext, model: ViewModel<'a>) -> Element<'a, Message> {
    // responsive gives the space actually available, so centering stays right
    // between resize notifications.
    responsive(move |available: Size| view_inner(&ctx, &model, available)).into()
}

/// Padding that centers content smaller than the available space.
fn centering_padding(content: Size, available: Size) -> Padding {
    let horizontal = ((available.width - content.width) / 2.0).max(0.0);
    let vertical = ((available.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

fn view_inner<'a>(
    ctx: &ViewContext,
    model: &ViewModel<'a>,
    available: Size,
) -> Element<'a, Message> {
    let element = model.surface.element();

    let image = Image::new(element.data().handle.clone())
        .width(Length::Fixed(model.scaled_size.width))
        .height(Length::Fixed(model.scaled_size.height))
        .filter_method(element.filter_method());

    let content =
        Container::new(image).padding(centering_padding(model.scaled_size, available));

    let scrollable = Scrollable::new(content)
        .id(Id::new(ctx.scrollable_id))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        })
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let gated = wheel_gate(scrollable).closed(model.wheel_zooms);

    Container::new(mouse_area(gated).interaction(model.cursor))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::viewer_surface(ctx.background))
        .into()
}
