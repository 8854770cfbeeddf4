// SPDX-License-Identifier: MPL-2.0
//! Incoming files and image representations.
//!
//! Files arrive from the native file dialog or from a window drop. They are
//! read in full, labelled with a declared content type, and only image-typed
//! files are turned into [`EncodedImage`]s.

pub mod content_type;
pub mod data_uri;
pub mod image;

pub use self::image::{EncodedImage, ImageData, LoadedImage};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// A file picked or dropped by the user, before any validation.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl IncomingFile {
    #[must_use]
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Builds a file whose name and content type are taken from `path`.
    #[must_use]
    pub fn from_path_and_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        Self::new(name, content_type::from_path(path), bytes)
    }

    /// Reads a file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Io`] if the file cannot be read.
    pub async fn read(path: PathBuf) -> Result<Self> {
        let bytes = tokio::fs::read(&path).await?;
        Ok(Self::from_path_and_bytes(&path, bytes))
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        content_type::is_image(&self.content_type)
    }

    /// Converts an image-typed file into its encoded form.
    ///
    /// Returns `None` for any other content type.
    #[must_use]
    pub fn into_encoded_image(self) -> Option<EncodedImage> {
        if self.is_image() {
            Some(EncodedImage::new(self.content_type, self.bytes))
        } else {
            None
        }
    }

    /// Checks the content type and decodes the image.
    ///
    /// Non-image and undecodable files give `None`. Decoding is CPU-bound,
    /// so callers on the UI thread should run this on a blocking task.
    #[must_use]
    pub fn into_loaded_image(self) -> Option<LoadedImage> {
        let name = self.name.clone();
        let Some(encoded) = self.into_encoded_image() else {
            log::debug!("ignoring non-image file {name}");
            return None;
        };
        match LoadedImage::decode(encoded) {
            Ok(image) => Some(image),
            Err(error) => {
                log::warn!("ignoring undecodable image {name}: {error}");
                None
            }
        }
    }
}
