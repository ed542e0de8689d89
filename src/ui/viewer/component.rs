// SPDX-License-Identifier: MPL-2.0
//! Viewer container: owns the surface, the scrollable canvas and the
//! fit-to-window mode, and routes raw window input to the canvas.

use crate::config::BackgroundTheme;
use crate::error::Result;
use crate::media::{self, ImageData};
use crate::ui::layout;
use crate::ui::state::{fit_scale, FitMode};
use crate::ui::viewer::canvas::{self, Canvas};
use crate::ui::viewer::pane;
use crate::ui::viewer::surface::Surface;
use iced::event::{self, Status};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{mouse, Element, Point, Rectangle, Task};
use std::path::Path;

/// Identifier used for the viewer scrollable widget.
pub const SCROLLABLE_ID: &str = "lens-pane-canvas";

/// Messages handled by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Native event forwarded from the application subscription, with the
    /// capture status it had after the widget tree saw it.
    RawEvent {
        event: event::Event,
        status: Status,
    },
    /// The container was resized; carries the new window-space viewport bounds.
    Resized(Rectangle),
    /// The scrollable reported new bounds or offset.
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Turn fit-to-window mode on or off.
    FitToWindow(bool),
}

/// Viewer container state.
#[derive(Debug, Clone)]
pub struct State {
    surface: Surface,
    canvas: Canvas,
    fit: FitMode,
    /// Last window-space cursor position.
    cursor_position: Option<Point>,
}

impl State {
    /// Loads the image at `path` and builds a viewer around it.
    ///
    /// # Errors
    ///
    /// Returns the loader error if the file cannot be read or decoded.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = media::load_image(path).inspect_err(|err| {
            tracing::warn!(path = %path.display(), %err, "failed to load image");
        })?;
        tracing::info!(
            path = %path.display(),
            width = data.width,
            height = data.height,
            "image loaded"
        );
        Ok(Self::from_image(data))
    }

    /// Builds a viewer around already decoded image data.
    #[must_use]
    pub fn from_image(data: ImageData) -> Self {
        let canvas = Canvas::new(data.width, data.height);
        Self {
            surface: Surface::new(data),
            canvas,
            fit: FitMode::default(),
            cursor_position: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RawEvent { event, status } => {
                if self.handle_raw_event(&event, status) == Status::Captured {
                    self.scroll_task()
                } else {
                    Task::none()
                }
            }
            Message::Resized(bounds) => {
                self.canvas.set_viewport(bounds);
                self.on_resize();
                self.scroll_task()
            }
            Message::ViewportChanged { bounds, offset } => {
                if self.canvas.set_viewport(bounds) && self.on_resize() == Status::Captured {
                    return self.scroll_task();
                }
                self.canvas.sync_offset(offset);
                Task::none()
            }
            Message::FitToWindow(enabled) => {
                self.fit_to_window(enabled);
                self.scroll_task()
            }
        }
    }

    /// Reacts to a change of viewport size: refits the image in fit mode,
    /// otherwise leaves the event to the default behaviour.
    pub fn on_resize(&mut self) -> Status {
        if self.fit.fit {
            self.fit_in_view();
            Status::Captured
        } else {
            Status::Ignored
        }
    }

    /// Turns fit-to-window mode on or off.
    ///
    /// Enabling remembers the current scale and fits the image to the viewport.
    /// Disabling scales back to the remembered value.
    pub fn fit_to_window(&mut self, enabled: bool) {
        if enabled == self.fit.fit {
            return;
        }

        let current_scale = self.canvas.scale();
        self.set_fit(enabled);

        if enabled {
            self.fit.prev_scale = current_scale;
            self.fit_in_view();
        } else {
            self.canvas.zoom_by(self.fit.restore_factor(current_scale));
        }

        tracing::info!(
            fit = enabled,
            scale = self.canvas.scale(),
            "fit-to-window changed"
        );
    }

    /// Single writer of the fit flag and the canvas interactivity, which are
    /// always opposite.
    fn set_fit(&mut self, enabled: bool) {
        self.fit.fit = enabled;
        self.canvas.set_interactive(!enabled);
    }

    /// Scales the image so it is entirely visible, keeping its aspect ratio.
    fn fit_in_view(&mut self) {
        if !self.fit.fit {
            return;
        }

        let element = self.surface.element();
        let Some(viewport) = self.canvas.viewport().size() else {
            return;
        };
        if let Some(scale) = fit_scale(element.width(), element.height(), viewport) {
            self.canvas.set_scale(scale);
        }
    }

    fn handle_raw_event(&mut self, event: &event::Event, status: Status) -> Status {
        let event::Event::Mouse(mouse_event) = event else {
            return Status::Ignored;
        };

        match mouse_event {
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(*position);
                self.canvas.on_pointer_move(*position)
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                // Presses already taken by other widgets (e.g. the control bar)
                // never start a pan.
                match self.cursor_position {
                    Some(position)
                        if status == Status::Ignored
                            && self.canvas.viewport().contains(position) =>
                    {
                        self.canvas.on_pointer_down(position)
                    }
                    _ => Status::Ignored,
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => self.canvas.on_pointer_up(),
            mouse::Event::WheelScrolled { delta } => {
                let over_canvas = self
                    .cursor_position
                    .is_none_or(|position| self.canvas.viewport().contains(position));
                if over_canvas {
                    self.canvas.on_wheel(canvas::wheel_delta(delta), self.fit.fit)
                } else {
                    Status::Ignored
                }
            }
            _ => Status::Ignored,
        }
    }

    /// Mirrors the canvas offset onto the scrollable widget.
    fn scroll_task(&self) -> Task<Message> {
        operation::snap_to(Id::new(SCROLLABLE_ID), self.canvas.relative_offset())
    }

    pub fn view(&self, background: BackgroundTheme) -> Element<'_, Message> {
        let canvas = pane::view(
            pane::ViewContext {
                background,
                scrollable_id: SCROLLABLE_ID,
            },
            pane::ViewModel {
                surface: &self.surface,
                scaled_size: self.canvas.scaled_size(),
                wheel_zooms: !self.fit.fit,
                cursor: self.canvas.mouse_interaction(),
            },
        );

        layout::pane(vec![canvas])
    }

    #[must_use]
    pub fn is_fit_to_window(&self) -> bool {
        self.fit.fit
    }

    #[must_use]
    pub fn prev_scale(&self) -> f32 {
        self.fit.prev_scale
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Current uniform scale of the canvas.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.canvas.scale()
    }
}
