// SPDX-License-Identifier: MPL-2.0
//! Uniform view transform
//!
//! A single scale factor applied equally to both axes. There is no rotation
//! and no independent x/y scale. The factor is not clamped, so repeated
//! zooming can drive it arbitrarily close to (or past) zero.

use crate::config::DEFAULT_SCALE;
use iced::Size;

/// Smallest rendered edge length in logical pixels.
const MIN_RENDERED_EDGE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

impl ViewTransform {
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Replaces the scale.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Multiplies the current scale by `factor`.
    pub fn scale_by(&mut self, factor: f32) {
        self.scale *= factor;
    }

    /// Size of content with the given natural size under this transform.
    ///
    /// Uses the magnitude of the scale, so a scale driven past zero mirrors
    /// back into a visible size and keeps growing as zoom-in continues.
    /// Never smaller than one pixel per edge.
    #[must_use]
    // Allow cast_precision_loss: f32 is exact for dimensions up to 2^24.
    #[allow(clippy::cast_precision_loss)]
    pub fn scaled_size(&self, width: u32, height: u32) -> Size {
        let magnitude = self.scale.abs();
        Size::new(
            (width as f32 * magnitude).max(MIN_RENDERED_EDGE),
            (height as f32 * magnitude).max(MIN_RENDERED_EDGE),
        )
    }
}

/// Scale that fits content of the given size entirely inside `viewport`
/// while keeping its aspect ratio.
///
/// Returns `None` when either size is degenerate.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fit_scale(width: u32, height: u32, viewport: Size) -> Option<f32> {
    if width == 0 || height == 0 || viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }

    let scale_x = viewport.width / width as f32;
    let scale_y = viewport.height / height as f32;
    let scale = scale_x.min(scale_y);

    (scale.is_finite() && scale > 0.0).then_some(scale)
}
