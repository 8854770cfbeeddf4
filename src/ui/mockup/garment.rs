// SPDX-License-Identifier: MPL-2.0
//! Garment artwork: configured photos or a drawn t-shirt silhouette.

use crate::config::MockupConfig;
use crate::domain::mockup::GarmentColor;
use crate::error::Result;
use crate::media::{content_type, EncodedImage, ImageData};
use crate::ui::design_tokens::palette;
use iced::widget::canvas::Path;
use iced::{Color, Point, Rectangle, Size};
use std::path::Path as FsPath;

/// Fraction of the shorter canvas side used by the silhouette.
const SILHOUETTE_FILL: f32 = 0.95;

/// Outline of a t-shirt in a unit square, clockwise from the left neckline.
const SILHOUETTE: [(f32, f32); 12] = [
    (0.38, 0.06),
    (0.21, 0.11),
    (0.03, 0.29),
    (0.13, 0.41),
    (0.24, 0.33),
    (0.24, 0.96),
    (0.76, 0.96),
    (0.76, 0.33),
    (0.87, 0.41),
    (0.97, 0.29),
    (0.79, 0.11),
    (0.62, 0.06),
];

/// Control point of the neckline curve in the unit square.
const NECKLINE_CONTROL: (f32, f32) = (0.5, 0.2);

/// Optional garment photos, one per color.
#[derive(Debug, Clone, Default)]
pub struct GarmentImages {
    black: Option<ImageData>,
    white: Option<ImageData>,
}

impl GarmentImages {
    /// Loads the garment photos named in the config.
    ///
    /// A photo that cannot be read or decoded is skipped with a warning and
    /// that color falls back to the drawn silhouette.
    #[must_use]
    pub fn load(config: &MockupConfig) -> Self {
        Self {
            black: config.black_garment.as_deref().and_then(load_or_warn),
            white: config.white_garment.as_deref().and_then(load_or_warn),
        }
    }

    #[must_use]
    pub fn for_color(&self, color: GarmentColor) -> Option<&ImageData> {
        match color {
            GarmentColor::Black => self.black.as_ref(),
            GarmentColor::White => self.white.as_ref(),
        }
    }
}

fn load_or_warn(path: &FsPath) -> Option<ImageData> {
    match load(path) {
        Ok(image) => Some(image),
        Err(error) => {
            log::warn!("garment image {} not usable: {error}", path.display());
            None
        }
    }
}

fn load(path: &FsPath) -> Result<ImageData> {
    let bytes = std::fs::read(path)?;
    EncodedImage::new(content_type::from_path(path), bytes).decode()
}

#[must_use]
pub fn fill_color(color: GarmentColor) -> Color {
    match color {
        GarmentColor::Black => palette::GARMENT_BLACK,
        GarmentColor::White => palette::GARMENT_WHITE,
    }
}

/// Square area the silhouette is drawn into, centred in `bounds`.
#[must_use]
pub fn silhouette_area(bounds: Size) -> Rectangle {
    let side = bounds.width.min(bounds.height) * SILHOUETTE_FILL;
    Rectangle::new(
        Point::new((bounds.width - side) / 2.0, (bounds.height - side) / 2.0),
        Size::new(side, side),
    )
}

/// T-shirt outline scaled into `area`.
#[must_use]
pub fn silhouette(area: Rectangle) -> Path {
    let map = |(x, y): (f32, f32)| Point::new(area.x + x * area.width, area.y + y * area.height);

    Path::new(|builder| {
        let mut points = SILHOUETTE.iter().copied().map(map);
        if let Some(start) = points.next() {
            builder.move_to(start);
        }
        for point in points {
            builder.line_to(point);
        }
        builder.quadratic_curve_to(map(NECKLINE_CONTROL), map(SILHOUETTE[0]));
        builder.close();
    })
}

/// Largest rectangle with the image's aspect ratio that fits in `bounds`.
#[must_use]
pub fn fit_contain(bounds: Size, image: &ImageData) -> Rectangle {
    let aspect = image.aspect_ratio();
    let (width, height) = if bounds.width / bounds.height.max(1.0) > aspect {
        (bounds.height * aspect, bounds.height)
    } else {
        (bounds.width, bounds.width / aspect)
    };
    Rectangle::new(
        Point::new((bounds.width - width) / 2.0, (bounds.height - height) / 2.0),
        Size::new(width, height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::fixtures;
    use crate::test_utils::assert_abs_diff_eq;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn silhouette_area_is_centred_square() {
        let area = silhouette_area(Size::new(400.0, 200.0));
        assert_abs_diff_eq!(area.width, 190.0);
        assert_abs_diff_eq!(area.height, 190.0);
        assert_abs_diff_eq!(area.x, 105.0);
    }

    #[test]
    fn silhouette_stays_within_unit_square() {
        for (x, y) in SILHOUETTE {
            assert!((0.0..=1.0).contains(&x));
            assert!((0.0..=1.0).contains(&y));
        }
    }

    #[test]
    fn fit_contain_preserves_aspect() {
        let image = ImageData::from_rgba(200, 100, vec![0; 200 * 100 * 4]);
        let rect = fit_contain(Size::new(300.0, 300.0), &image);
        assert_abs_diff_eq!(rect.width, 300.0);
        assert_abs_diff_eq!(rect.height, 150.0);
        assert_abs_diff_eq!(rect.y, 75.0);
    }

    #[test]
    fn configured_photos_are_loaded_per_color() {
        let dir = tempdir().expect("temp dir");
        let black = dir.path().join("black.png");
        std::fs::write(&black, fixtures::png_bytes(4, 4, [0, 0, 0, 255])).expect("write");

        let images = GarmentImages::load(&MockupConfig {
            black_garment: Some(black),
            white_garment: Some(PathBuf::from("/nonexistent/white.png")),
            ..MockupConfig::default()
        });

        assert_eq!(
            images.for_color(GarmentColor::Black).map(|i| i.width),
            Some(4)
        );
        assert!(images.for_color(GarmentColor::White).is_none());
    }
}
