// SPDX-License-Identifier: MPL-2.0
//! Encoded and decoded image representations.
//!
//! [`EncodedImage`] is the transferable form: the original file bytes plus
//! their declared content type. [`ImageData`] is the displayable form handed
//! to Iced widgets and canvas frames.

use super::data_uri;
use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fmt;
use std::sync::Arc;

/// Original bytes of an image together with their declared content type.
///
/// Bytes are shared through an `Arc` so that the working image, the processed
/// preview and the staged result can all point at the same buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    content_type: String,
    bytes: Arc<Vec<u8>>,
}

impl EncodedImage {
    #[must_use]
    pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes: Arc::new(bytes),
        }
    }

    /// Parses a base64 `data:` URI.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Decode`] if the URI is malformed.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let (content_type, bytes) = data_uri::decode(uri)?;
        Ok(Self::new(content_type, bytes))
    }

    #[must_use]
    pub fn to_data_uri(&self) -> String {
        data_uri::encode(&self.content_type, &self.bytes)
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns true if both values share the same underlying buffer.
    #[must_use]
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }

    /// Decodes the bytes into a displayable image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Decode`] if the bytes are not a
    /// supported image format.
    pub fn decode(&self) -> Result<ImageData> {
        let img = image_rs::load_from_memory(&self.bytes)?;
        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_vec();
        Ok(ImageData::from_rgba(width, height, pixels))
    }
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Decoded image ready for rendering.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Width divided by height, or 1.0 for degenerate images.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// An image paired with its decoded form.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub encoded: EncodedImage,
    pub display: ImageData,
}

impl LoadedImage {
    /// Decodes `encoded` and keeps both representations.
    ///
    /// # Errors
    ///
    /// Propagates the decode error from [`EncodedImage::decode`].
    pub fn decode(encoded: EncodedImage) -> Result<Self> {
        let display = encoded.decode()?;
        Ok(Self { encoded, display })
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::*;

    #[test]
    fn decode_returns_expected_dimensions() {
        let image = fixtures::png(4, 2).decode().expect("decode png");
        assert_eq!(image.width, 4);
        assert_eq!(image.height, 2);
    }

    #[test]
    fn decode_fails_on_garbage_bytes() {
        let garbage = EncodedImage::new("image/png", vec![0, 1, 2, 3]);
        assert!(garbage.decode().is_err());
    }

    #[test]
    fn data_uri_round_trip_is_bit_identical() {
        let original = fixtures::png(3, 3);
        let parsed = EncodedImage::from_data_uri(&original.to_data_uri()).expect("parse");
        assert_eq!(parsed, original);
        assert_eq!(parsed.bytes(), original.bytes());
        assert_eq!(parsed.content_type(), "image/png");
    }

    #[test]
    fn clones_share_buffer() {
        let original = fixtures::png(1, 1);
        let copy = original.clone();
        assert!(copy.shares_buffer_with(&original));
        let rebuilt = EncodedImage::new("image/png", original.bytes().to_vec());
        assert!(!rebuilt.shares_buffer_with(&original));
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn debug_output_omits_bytes() {
        let image = EncodedImage::new("image/png", vec![9; 64]);
        let debug = format!("{image:?}");
        assert!(debug.contains("len: 64"));
        assert!(!debug.contains("9, 9"));
    }

    #[test]
    fn aspect_ratio_handles_zero_height() {
        let image = ImageData::from_rgba(0, 0, Vec::new());
        assert!((image.aspect_ratio() - 1.0).abs() < f32::EPSILON);
        let wide = ImageData::from_rgba(4, 2, vec![0; 32]);
        assert!((wide.aspect_ratio() - 2.0).abs() < f32::EPSILON);
    }
}
