// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every screen.
//!
//! - **palette**: base colors, including the two garment colors
//! - **opacity**: standard alpha levels
//! - **spacing**: 8px grid
//! - **sizing**: fixed component sizes
//! - **typography**: font size scale
//! - **border** / **radius**: stroke widths and corner radii
//!
//! ```
//! use pixelweaver::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let highlight = Color {
//!     a: opacity::HIGHLIGHT,
//!     ..palette::ACCENT_500
//! };
//! let padding = spacing::MD;
//! # let _ = (highlight, padding);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.14, 0.14, 0.17);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.78, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.92);

    // Accent (violet)
    pub const ACCENT_400: Color = Color::from_rgb(0.66, 0.45, 1.0);
    pub const ACCENT_500: Color = Color::from_rgb(0.55, 0.33, 0.95);
    pub const ACCENT_600: Color = Color::from_rgb(0.45, 0.25, 0.82);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    /// Fill of the drawn black garment.
    pub const GARMENT_BLACK: Color = Color::from_rgb(0.07, 0.07, 0.08);
    /// Fill of the drawn white garment.
    pub const GARMENT_WHITE: Color = Color::from_rgb(0.97, 0.97, 0.96);
    /// Seam and outline stroke for garments.
    pub const GARMENT_OUTLINE: Color = Color::from_rgb(0.5, 0.5, 0.52);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Drop zone fill while a file hovers over the window.
    pub const HIGHLIGHT: f32 = 0.18;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const DROP_ZONE_HEIGHT: f32 = 220.0;
    pub const PREVIEW_SIZE: f32 = 200.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 8.0;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.0;
    pub const MOCKUP_MIN_SIZE: f32 = 360.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const ICON_MD: f32 = 24.0;
}

pub mod typography {
    /// Screen titles
    pub const TITLE_LG: f32 = 28.0;
    /// Section headers
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HIGHLIGHT > 0.0 && opacity::HIGHLIGHT < opacity::OVERLAY_MEDIUM);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn garment_colors_are_distinguishable() {
        let black = palette::GARMENT_BLACK;
        let white = palette::GARMENT_WHITE;
        assert!(white.r - black.r > 0.8);
    }
}
