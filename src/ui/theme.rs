// SPDX-License-Identifier: MPL-2.0
//! Shared UI colors and container styles.

use crate::config::BackgroundTheme;
use iced::widget::container;
use iced::{Background, Color, Theme};

const GRAY_100: Color = Color::from_rgb(0.96, 0.96, 0.96);
const GRAY_900: Color = Color::from_rgb(0.11, 0.11, 0.12);
const ERROR_500: Color = Color::from_rgb(0.86, 0.21, 0.27);

/// Flat viewer surface color for the given background theme.
pub fn viewer_surface_color(theme: BackgroundTheme) -> Color {
    match theme {
        BackgroundTheme::Light => GRAY_100,
        BackgroundTheme::Dark => GRAY_900,
    }
}

/// Application theme matching the viewer background, so controls stay readable.
pub fn app_theme(theme: BackgroundTheme) -> Theme {
    match theme {
        BackgroundTheme::Light => Theme::Light,
        BackgroundTheme::Dark => Theme::Dark,
    }
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    ERROR_500
}

/// Container style painting the viewer surface.
pub fn viewer_surface(theme: BackgroundTheme) -> impl Fn(&Theme) -> container::Style {
    let color = viewer_surface_color(theme);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Control bar style derived from the active theme's weak background.
pub fn control_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark_surfaces_differ() {
        assert_ne!(
            viewer_surface_color(BackgroundTheme::Light),
            viewer_surface_color(BackgroundTheme::Dark)
        );
    }

    #[test]
    fn app_theme_follows_background() {
        assert_eq!(app_theme(BackgroundTheme::Light), Theme::Light);
        assert_eq!(app_theme(BackgroundTheme::Dark), Theme::Dark);
    }
}
