// SPDX-License-Identifier: MPL-2.0
//! Garment options offered by the mockup screen.

use std::fmt;

/// Garment color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GarmentColor {
    Black,
    #[default]
    White,
}

impl GarmentColor {
    pub const ALL: [Self; 2] = [Self::Black, Self::White];

    /// Fluent key of the color label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Black => "mockup-color-black",
            Self::White => "mockup-color-white",
        }
    }
}

/// Shirt size. Nothing is selected until the user picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShirtSize {
    S,
    M,
    L,
    XL,
}

impl ShirtSize {
    pub const ALL: [Self; 4] = [Self::S, Self::M, Self::L, Self::XL];
}

impl fmt::Display for ShirtSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
        };
        f.write_str(label)
    }
}
