// SPDX-License-Identifier: MPL-2.0
//! Overlay rotation in whole degrees.

use crate::config::{FULL_TURN_DEGREES, ROTATION_STEP_DEGREES};

/// Overlay rotation in degrees.
///
/// The rotate button steps by 15° and wraps below 360°. The slider may set
/// any value in 0–360 inclusive, so 360 is representable; it renders the
/// same as 0.
///
/// ```
/// use pixelweaver::ui::state::RotationDegrees;
///
/// let angle = RotationDegrees::default().step();
/// assert_eq!(angle.degrees(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationDegrees(u16);

impl RotationDegrees {
    /// Creates a rotation from a slider value, clamped to 0–360.
    #[must_use]
    pub fn from_slider(degrees: f32) -> Self {
        if degrees.is_nan() {
            return Self::default();
        }
        let clamped = degrees.clamp(0.0, f32::from(FULL_TURN_DEGREES));
        // Clamped to [0, 360] so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = clamped.round() as u16;
        Self(whole)
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        f32::from(self.0).to_radians()
    }

    /// Adds one rotation step, wrapping at a full turn.
    #[must_use]
    pub fn step(self) -> Self {
        Self((self.0 + ROTATION_STEP_DEGREES) % FULL_TURN_DEGREES)
    }
}
