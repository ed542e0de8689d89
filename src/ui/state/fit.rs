// SPDX-License-Identifier: MPL-2.0
//! Fit-to-window mode flag and the scale to restore when it is turned off.

use crate::config::DEFAULT_SCALE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitMode {
    /// Whether the scale tracks the viewport size.
    pub fit: bool,

    /// Scale captured when fit mode was last enabled.
    pub prev_scale: f32,
}

impl Default for FitMode {
    fn default() -> Self {
        Self {
            fit: false,
            prev_scale: DEFAULT_SCALE,
        }
    }
}

impl FitMode {
    /// Factor that brings `current_scale` back to the scale captured on entry.
    #[must_use]
    pub fn restore_factor(&self, current_scale: f32) -> f32 {
        self.prev_scale / current_scale
    }
}
