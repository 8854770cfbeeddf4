// SPDX-License-Identifier: MPL-2.0
//! Declared content types for incoming files.
//!
//! A file's content type is declared from its name, the same way a file
//! picker labels a selection before any bytes are inspected. Only types in the
//! `image/` category are processed by the upload widget.

use image_rs::ImageFormat;
use std::path::Path;

/// Content type reported for files whose extension is unknown.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Category prefix shared by every accepted content type.
pub const IMAGE_CATEGORY: &str = "image/";

/// Returns the declared content type for a file name or path.
#[must_use]
pub fn from_path(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

/// Returns true if the content type belongs to the image category.
#[must_use]
pub fn is_image(content_type: &str) -> bool {
    content_type
        .get(..IMAGE_CATEGORY.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(IMAGE_CATEGORY))
}

/// File extensions of every image format the decoder knows, for dialog
/// filters.
#[must_use]
pub fn image_extensions() -> Vec<&'static str> {
    ImageFormat::all()
        .filter(|format| format.reading_enabled())
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_image_extensions_are_declared_as_images() {
        assert_eq!(from_path(Path::new("shirt.png")), "image/png");
        assert_eq!(from_path(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(from_path(Path::new("/tmp/anim.gif")), "image/gif");
        assert!(is_image(from_path(Path::new("art.webp"))));
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(from_path(Path::new("notes.txt")), FALLBACK_CONTENT_TYPE);
        assert_eq!(from_path(Path::new("no_extension")), FALLBACK_CONTENT_TYPE);
    }

    #[test]
    fn is_image_checks_category_prefix() {
        assert!(is_image("image/png"));
        assert!(is_image("IMAGE/PNG"));
        assert!(!is_image("application/pdf"));
        assert!(!is_image("text/plain"));
        assert!(!is_image("img"));
        assert!(!is_image(""));
    }

    #[test]
    fn dialog_extensions_include_enabled_formats() {
        let extensions = image_extensions();
        assert!(extensions.contains(&"png"));
        assert!(extensions.contains(&"jpg"));
    }
}
