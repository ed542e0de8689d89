// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the image viewer.
//!
//! The `App` struct owns the viewer container, translates window events into
//! viewport bounds and forwards pointer input. Policy decisions (window size,
//! initial fit mode, background) are resolved here from the CLI flags and the
//! loaded configuration.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, BackgroundTheme, Config, CONTROL_BAR_HEIGHT};
use crate::error::Error;
use crate::ui::theme;
use crate::ui::viewer::component;
use iced::{window, Element, Point, Rectangle, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

const APP_TITLE: &str = "LensPane";

/// What the main window currently shows.
pub enum Content {
    Viewer(Box<component::State>),
    /// The image could not be opened.
    Failed { path: PathBuf, error: Error },
}

/// Root Iced application state.
pub struct App {
    content: Content,
    file_path: PathBuf,
    background: BackgroundTheme,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("file_path", &self.file_path)
            .field("has_image", &self.viewer().is_some())
            .field("window_size", &self.window_size)
            .finish()
    }
}

/// Builds the window settings from the loaded configuration.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window_size();

    window::Settings {
        size: Size::new(width as f32, height as f32),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Viewport bounds in window space for a window of the given size: everything
/// below the control bar.
#[must_use]
pub fn viewport_bounds(window_size: Size) -> Rectangle {
    Rectangle::new(
        Point::new(0.0, CONTROL_BAR_HEIGHT),
        Size::new(
            window_size.width,
            (window_size.height - CONTROL_BAR_HEIGHT).max(0.0),
        ),
    )
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) =
        config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
    if let Some(warning) = &config_warning {
        tracing::warn!(%warning, "falling back to default configuration");
    }
    let settings = window_settings(&config);

    // iced 0.14 wants an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, &config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .antialiasing(true)
        .run()
}

impl App {
    /// Opens the image named in `flags` and applies the configured display
    /// preferences.
    fn new(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let (width, height) = config.window_size();
        let window_size = Size::new(width as f32, height as f32);

        let content = match component::State::new(&flags.file_path) {
            Ok(viewer) => Content::Viewer(Box::new(viewer)),
            Err(error) => Content::Failed {
                path: flags.file_path.clone(),
                error,
            },
        };

        let mut app = App {
            content,
            file_path: flags.file_path,
            background: config.display.background.unwrap_or_default(),
            window_size,
        };

        let mut task = app.resize_viewer(window_size);
        let fit = flags.fit || config.display.fit_to_window.unwrap_or(false);
        if fit {
            task = task.chain(app.forward(component::Message::FitToWindow(true)));
        }

        (app, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(message) => self.forward(message),
            Message::WindowResized(size) => {
                self.window_size = size;
                self.resize_viewer(size)
            }
            Message::FitToWindowToggled(enabled) => {
                self.forward(component::Message::FitToWindow(enabled))
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            content: &self.content,
            file_name: self.file_name(),
            background: self.background,
        })
    }

    fn title(&self) -> String {
        match self.file_path.file_name() {
            Some(name) => format!("{} - {APP_TITLE}", name.to_string_lossy()),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        theme::app_theme(self.background)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn forward(&mut self, message: component::Message) -> Task<Message> {
        match &mut self.content {
            Content::Viewer(viewer) => viewer.update(message).map(Message::Viewer),
            Content::Failed { .. } => Task::none(),
        }
    }

    fn resize_viewer(&mut self, window_size: Size) -> Task<Message> {
        self.forward(component::Message::Resized(viewport_bounds(window_size)))
    }

    fn file_name(&self) -> &str {
        self.file_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// The viewer, when the image was opened successfully.
    #[must_use]
    pub fn viewer(&self) -> Option<&component::State> {
        match &self.content {
            Content::Viewer(viewer) => Some(viewer),
            Content::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayConfig, WindowConfig};
    use crate::test_utils::assert_abs_diff_eq;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join("sample.png");
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("failed to write png");
        path
    }

    fn config_with_window(width: u32, height: u32) -> Config {
        Config {
            window: WindowConfig { width, height },
            ..Config::default()
        }
    }

    #[test]
    fn viewport_bounds_exclude_control_bar() {
        let bounds = viewport_bounds(Size::new(800.0, 650.0));
        assert_abs_diff_eq!(bounds.y, CONTROL_BAR_HEIGHT);
        assert_abs_diff_eq!(bounds.height, 650.0 - CONTROL_BAR_HEIGHT);
        assert_abs_diff_eq!(bounds.width, 800.0);
    }

    #[test]
    fn viewport_bounds_never_negative() {
        let bounds = viewport_bounds(Size::new(100.0, 10.0));
        assert_abs_diff_eq!(bounds.height, 0.0);
    }

    #[test]
    fn window_settings_follow_config() {
        let settings = window_settings(&config_with_window(1024, 768));
        assert_abs_diff_eq!(settings.size.width, 1024.0);
        assert_abs_diff_eq!(settings.size.height, 768.0);
    }

    #[test]
    fn boot_with_missing_file_shows_error() {
        let flags = Flags {
            file_path: PathBuf::from("/definitely/not/here.png"),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags, &Config::default());

        assert!(app.viewer().is_none());
        assert!(matches!(app.content, Content::Failed { error: Error::Io(_), .. }));
        let _element = app.view();
    }

    #[test]
    fn boot_with_fit_flag_fits_image() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = write_png(&dir, 400, 400);
        let height = 200 + CONTROL_BAR_HEIGHT as u32;
        let flags = Flags {
            file_path: path,
            fit: true,
            config_dir: None,
        };

        let (app, _task) = App::new(flags, &config_with_window(400, height));
        let viewer = app.viewer().expect("image should load");

        assert!(viewer.is_fit_to_window());
        assert_abs_diff_eq!(viewer.scale(), 0.5);
    }

    #[test]
    fn config_enables_fit_and_background() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = write_png(&dir, 100, 100);
        let config = Config {
            display: DisplayConfig {
                fit_to_window: Some(true),
                background: Some(BackgroundTheme::Light),
            },
            ..Config::default()
        };

        let (app, _task) = App::new(
            Flags {
                file_path: path,
                ..Flags::default()
            },
            &config,
        );

        assert!(app.viewer().is_some_and(component::State::is_fit_to_window));
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn window_resize_refits_in_fit_mode() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = write_png(&dir, 200, 100);
        let (mut app, _task) = App::new(
            Flags {
                file_path: path,
                ..Flags::default()
            },
            &config_with_window(800, 650),
        );

        let _ = app.update(Message::FitToWindowToggled(true));
        let _ = app.update(Message::WindowResized(Size::new(
            100.0,
            100.0 + CONTROL_BAR_HEIGHT,
        )));

        let viewer = app.viewer().expect("image should load");
        assert_abs_diff_eq!(viewer.scale(), 0.5);

        let _ = app.update(Message::FitToWindowToggled(false));
        let viewer = app.viewer().expect("image should load");
        assert_abs_diff_eq!(viewer.scale(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn title_shows_file_name() {
        let (app, _task) = App::new(
            Flags {
                file_path: PathBuf::from("/tmp/missing/photo.png"),
                ..Flags::default()
            },
            &Config::default(),
        );
        assert_eq!(app.title(), "photo.png - LensPane");
    }

    #[test]
    fn title_without_file_is_app_name() {
        let (app, _task) = App::new(Flags::default(), &Config::default());
        assert_eq!(app.title(), APP_TITLE);
    }
}
