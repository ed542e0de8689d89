// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer::component;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// The main window changed size.
    WindowResized(Size),
    /// The "Fit to window" control was toggled.
    FitToWindowToggled(bool),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Image to open.
    pub file_path: PathBuf,
    /// Start in fit-to-window mode regardless of the config file.
    pub fit: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LENS_PANE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
