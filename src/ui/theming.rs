// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub accent: Color,
    pub accent_strong: Color,

    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    /// Backdrop behind the mockup canvas.
    pub stage: Color,
    /// Border of the drop zone when not highlighted.
    pub drop_zone_border: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            accent: palette::ACCENT_500,
            accent_strong: palette::ACCENT_600,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
            stage: palette::GRAY_200,
            drop_zone_border: palette::GRAY_400,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            accent: palette::ACCENT_400,
            accent_strong: palette::ACCENT_500,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
            stage: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::GRAY_700
            },
            drop_zone_border: palette::GRAY_700,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, asks the OS and falls back to dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    /// Iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        assert!(ColorScheme::light().surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        assert!(ColorScheme::dark().surface_primary.r < 0.2);
    }

    #[test]
    fn explicit_modes_pick_matching_schemes() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.iced_theme(), iced::Theme::Dark);
        assert_eq!(ThemeMode::Light.iced_theme(), iced::Theme::Light);
        let _ = ThemeMode::System.is_dark();
    }
}
