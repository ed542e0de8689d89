// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Pannable, zoomable image viewer with fit-to-window
//! - [`state`] - Plain state types (pan, viewport, transform, fit mode)
//! - [`widgets`] - Custom Iced widgets
//! - [`layout`] - Pane layout helper
//! - [`theme`] - Theme colors and styling helpers

pub mod layout;
pub mod state;
pub mod theme;
pub mod viewer;
pub mod widgets;
