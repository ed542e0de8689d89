// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state types behind the viewer widgets, kept free of widget code so
//! they can be tested without a renderer.

pub mod fit;
pub mod pan;
pub mod transform;
pub mod viewport;

pub use fit::FitMode;
pub use pan::PanState;
pub use transform::{fit_scale, ViewTransform};
pub use viewport::ViewportState;
