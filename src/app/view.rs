// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: a control bar above the viewer, or an
//! error screen when the image could not be opened.

use super::{Content, Message};
use crate::config::{BackgroundTheme, CONTROL_BAR_HEIGHT};
use crate::error::Error;
use crate::ui::layout;
use crate::ui::theme;
use crate::ui::viewer::component;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{toggler, Column, Container, Row, Space, Text};
use iced::{Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub content: &'a Content,
    pub file_name: &'a str,
    pub background: BackgroundTheme,
}

/// Renders the application.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.content {
        Content::Viewer(viewer) => view_viewer(viewer, ctx.file_name, ctx.background),
        Content::Failed { path, error } => view_error(path, error),
    }
}

fn view_viewer<'a>(
    viewer: &'a component::State,
    file_name: &'a str,
    background: BackgroundTheme,
) -> Element<'a, Message> {
    let fit_toggle = toggler(viewer.is_fit_to_window())
        .label("Fit to window")
        .on_toggle(Message::FitToWindowToggled);

    let zoom_label = Text::new(format!("{:.0}%", viewer.scale() * 100.0)).size(14);

    let bar = Row::new()
        .spacing(12)
        .padding([8, 12])
        .align_y(Vertical::Center)
        .push(Text::new(file_name).size(14))
        .push(Space::new().width(Length::Fill))
        .push(zoom_label)
        .push(fit_toggle);

    let control_bar = Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(CONTROL_BAR_HEIGHT))
        .style(theme::control_bar);

    let viewer_content = viewer.view(background).map(Message::Viewer);

    layout::pane(vec![control_bar.into(), viewer_content])
}

fn view_error<'a>(path: &'a Path, error: &'a Error) -> Element<'a, Message> {
    let heading = Text::new("Unable to open image").size(24);
    let details = Text::new(format!("{}: {}", path.display(), error))
        .color(theme::error_text_color());

    let content = Column::new()
        .spacing(12)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(details);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(16)
        .into()
}
