// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window and mouse events to the viewer. Mouse events keep the
//! capture status they had after the widget tree saw them, so the viewer can
//! tell clicks on the control bar apart from clicks on the canvas.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, mouse, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(event, status))
}

fn route_event(event: event::Event, status: event::Status) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(
            mouse::Event::CursorMoved { .. }
            | mouse::Event::ButtonPressed(mouse::Button::Left)
            | mouse::Event::ButtonReleased(mouse::Button::Left)
            | mouse::Event::WheelScrolled { .. },
        ) => Some(Message::Viewer(component::Message::RawEvent { event, status })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    #[test]
    fn resize_is_routed_to_app() {
        let routed = route_event(
            event::Event::Window(window::Event::Resized(Size::new(640.0, 480.0))),
            event::Status::Ignored,
        );
        assert!(matches!(routed, Some(Message::WindowResized(size)) if size.width == 640.0));
    }

    #[test]
    fn pointer_events_keep_their_status() {
        let routed = route_event(
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            event::Status::Captured,
        );
        assert!(matches!(
            routed,
            Some(Message::Viewer(component::Message::RawEvent {
                status: event::Status::Captured,
                ..
            }))
        ));

        let routed = route_event(
            event::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(1.0, 2.0),
            }),
            event::Status::Ignored,
        );
        assert!(routed.is_some());
    }

    #[test]
    fn other_buttons_are_dropped() {
        let routed = route_event(
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)),
            event::Status::Ignored,
        );
        assert!(routed.is_none());
    }
}
