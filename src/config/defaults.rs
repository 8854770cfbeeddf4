// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Generation**: Simulated generation timing and template name
//! - **Scale**: Overlay scale bounds and slider mapping
//! - **Rotation**: Overlay rotation step
//! - **Cart**: Add-to-cart acknowledgment pulse
//! - **Layout**: Mockup layout constraints

use std::time::Duration;

// ==========================================================================
// Generation Defaults
// ==========================================================================

/// Default duration of the simulated generation (in milliseconds).
pub const DEFAULT_GENERATION_DURATION_MS: u64 = 1500;

/// Minimum configurable generation duration (in milliseconds).
pub const MIN_GENERATION_DURATION_MS: u64 = 100;

/// Maximum configurable generation duration (in milliseconds).
pub const MAX_GENERATION_DURATION_MS: u64 = 60_000;

/// Progress value reported once generation has completed.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Template name shown before the user edits it.
pub const DEFAULT_TEMPLATE_NAME: &str = "Cyberglyph";

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Initial overlay scale factor.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Smallest overlay scale factor.
pub const MIN_SCALE: f32 = 0.5;

/// Largest overlay scale factor.
pub const MAX_SCALE: f32 = 2.0;

/// Scale change per zoom button press.
pub const SCALE_STEP: f32 = 0.1;

/// Lowest value of the scale slider (maps to [`MIN_SCALE`]).
pub const SCALE_SLIDER_MIN: f32 = 25.0;

/// Highest value of the scale slider (maps to [`MAX_SCALE`]).
pub const SCALE_SLIDER_MAX: f32 = 100.0;

/// Slider value divided by this gives the scale factor.
pub const SCALE_SLIDER_DIVISOR: f32 = 50.0;

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Degrees added per rotate button press and slider step.
pub const ROTATION_STEP_DEGREES: u16 = 15;

/// Full turn in degrees (upper bound of the rotation slider).
pub const FULL_TURN_DEGREES: u16 = 360;

// ==========================================================================
// Cart Acknowledgment Defaults
// ==========================================================================

/// How long the "added" acknowledgment stays visible (in milliseconds).
pub const DEFAULT_CART_ACK_MS: u64 = 2000;

/// Minimum configurable acknowledgment duration (in milliseconds).
pub const MIN_CART_ACK_MS: u64 = 250;

/// Maximum configurable acknowledgment duration (in milliseconds).
pub const MAX_CART_ACK_MS: u64 = 10_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Overlay base width as a fraction of the mockup container width.
pub const OVERLAY_MAX_WIDTH_RATIO: f32 = 0.6;

/// Interval of the tick subscription driving timed UI state.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
