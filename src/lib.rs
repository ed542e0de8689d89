// SPDX-License-Identifier: MPL-2.0
//! `lens_pane` is a pannable, zoomable image viewer built with the Iced GUI framework.
//!
//! The viewer keeps the image inside a scrollable canvas that can be dragged
//! with the left mouse button and zoomed with the wheel, and offers a
//! fit-to-window mode that scales the image to the available space.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
