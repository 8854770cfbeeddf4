// SPDX-License-Identifier: MPL-2.0
//! Overlay scale factor.

use crate::config::{
    DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, SCALE_SLIDER_DIVISOR, SCALE_SLIDER_MAX, SCALE_SLIDER_MIN,
    SCALE_STEP,
};

/// Overlay scale factor, guaranteed to be within 0.5–2.0.
///
/// # Example
///
/// ```
/// use pixelweaver::ui::state::ScaleFactor;
///
/// let scale = ScaleFactor::from_slider(25.0);
/// assert_eq!(scale.value(), 0.5);
///
/// // Values outside the range are clamped
/// assert_eq!(ScaleFactor::new(10.0).value(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Creates a new scale factor, clamping to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SCALE, MAX_SCALE))
    }

    /// Maps a slider value in 25–100 to a scale factor.
    #[must_use]
    pub fn from_slider(value: f32) -> Self {
        Self::new(value.clamp(SCALE_SLIDER_MIN, SCALE_SLIDER_MAX) / SCALE_SLIDER_DIVISOR)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Value shown by the scale slider.
    #[must_use]
    pub fn slider_value(self) -> f32 {
        self.0 * SCALE_SLIDER_DIVISOR
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + SCALE_STEP)
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - SCALE_STEP)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(ScaleFactor::new(0.1).value(), MIN_SCALE);
        assert_abs_diff_eq!(ScaleFactor::new(9.0).value(), MAX_SCALE);
        assert_abs_diff_eq!(ScaleFactor::new(f32::NAN).value(), DEFAULT_SCALE);
    }

    #[test]
    fn slider_endpoints_map_to_scale_bounds() {
        assert_abs_diff_eq!(ScaleFactor::from_slider(25.0).value(), 0.5);
        assert_abs_diff_eq!(ScaleFactor::from_slider(100.0).value(), 2.0);
        assert_abs_diff_eq!(ScaleFactor::from_slider(50.0).value(), 1.0);
    }

    #[test]
    fn slider_value_is_inverse_of_from_slider() {
        let scale = ScaleFactor::from_slider(70.0);
        assert_abs_diff_eq!(scale.slider_value(), 70.0, epsilon = 1e-4);
    }

    #[test]
    fn repeated_steps_stay_in_range() {
        let mut scale = ScaleFactor::default();
        for _ in 0..50 {
            scale = scale.zoom_in();
        }
        assert!(scale.is_max());
        assert_abs_diff_eq!(scale.value(), MAX_SCALE, epsilon = F32_EPSILON);

        for _ in 0..50 {
            scale = scale.zoom_out();
        }
        assert!(scale.is_min());
        assert_abs_diff_eq!(scale.value(), MIN_SCALE, epsilon = F32_EPSILON);
    }

    #[test]
    fn one_step_changes_by_a_tenth() {
        assert_abs_diff_eq!(ScaleFactor::default().zoom_in().value(), 1.1, epsilon = 1e-5);
        assert_abs_diff_eq!(ScaleFactor::default().zoom_out().value(), 0.9, epsilon = 1e-5);
    }
}
