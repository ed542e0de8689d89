// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Uniform scale of a freshly constructed viewer (1.0 = original size).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Scale change per unit of wheel delta: `scale = 1.0 + delta * WHEEL_ZOOM_SENSITIVITY`.
pub const WHEEL_ZOOM_SENSITIVITY: f32 = 0.001;

/// Wheel delta reported for one notch of a line-based wheel (eighths of a degree).
pub const WHEEL_DELTA_PER_LINE: f32 = 120.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 200;
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// Height of the control bar above the viewer pane, in logical pixels.
pub const CONTROL_BAR_HEIGHT: f32 = 44.0;
