// SPDX-License-Identifier: MPL-2.0
//! Layout helpers shared by screens.

use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Builds a pane that fills its container and stacks `children` top to bottom.
pub fn pane<'a, Message: 'a>(children: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let content = Column::with_children(children)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
