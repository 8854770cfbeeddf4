// SPDX-License-Identifier: MPL-2.0
//! Placement of the overlay on the mockup canvas.
//!
//! The overlay sits at the container centre, offset by the dragged position.
//! Rendering applies translate, then scale, then rotate about the overlay
//! centre; [`OverlayLayout::contains`] inverts the same chain.

use crate::config::OVERLAY_MAX_WIDTH_RATIO;
use iced::{Point, Rectangle, Size, Vector};

/// Resolved overlay placement for one container size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    /// Overlay centre in container coordinates.
    pub center: Point,
    /// Untransformed overlay size.
    pub base: Size,
    pub scale: f32,
    /// Clockwise rotation in radians.
    pub rotation: f32,
}

impl OverlayLayout {
    /// Computes the layout of an image of `image_size` pixels.
    ///
    /// The base width is the natural width, capped at 60% of the container
    /// width; the height keeps the aspect ratio.
    #[must_use]
    pub fn new(
        container: Size,
        image_size: Size,
        position: Point,
        scale: f32,
        rotation: f32,
    ) -> Self {
        let width = image_size
            .width
            .min(container.width * OVERLAY_MAX_WIDTH_RATIO)
            .max(0.0);
        let height = if image_size.width > 0.0 {
            width * image_size.height / image_size.width
        } else {
            0.0
        };

        Self {
            center: Point::new(
                container.width / 2.0 + position.x,
                container.height / 2.0 + position.y,
            ),
            base: Size::new(width, height),
            scale,
            rotation,
        }
    }

    /// Offset from the centre to the translate origin of the drawn image.
    #[must_use]
    pub fn translation(&self) -> Vector {
        Vector::new(self.center.x, self.center.y)
    }

    /// Image rectangle in the overlay's local (post-transform) coordinates.
    #[must_use]
    pub fn local_bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(-self.base.width / 2.0, -self.base.height / 2.0),
            self.base,
        )
    }

    /// Whether `point` (container coordinates) lies on the transformed overlay.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        if self.scale <= 0.0 {
            return false;
        }
        let d = point - self.center;
        let (sin, cos) = self.rotation.sin_cos();
        let local_x = (d.x * cos + d.y * sin) / self.scale;
        let local_y = (-d.x * sin + d.y * cos) / self.scale;

        local_x.abs() <= self.base.width / 2.0 && local_y.abs() <= self.base.height / 2.0
    }
}
