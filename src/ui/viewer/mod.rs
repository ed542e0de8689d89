// SPDX-License-Identifier: MPL-2.0
//! Image viewer: a scrollable, zoomable canvas over a single-image surface,
//! wrapped by a container that owns the fit-to-window mode.

pub mod canvas;
pub mod component;
pub mod pane;
pub mod surface;

pub use canvas::Canvas;
pub use component::{Message, State, SCROLLABLE_ID};
pub use surface::{ImageElement, Surface};
