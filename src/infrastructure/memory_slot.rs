// SPDX-License-Identifier: MPL-2.0
//! In-process handoff slot.
//!
//! Used by tests and by the demo mode when no data directory is available.

use crate::application::port::HandoffSlot;
use crate::error::{Error, Result};
use crate::media::EncodedImage;
use std::sync::Mutex;

/// [`HandoffSlot`] kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<EncodedImage>>,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already holds `image`.
    #[must_use]
    pub fn with_value(image: EncodedImage) -> Self {
        Self {
            value: Mutex::new(Some(image)),
        }
    }
}

impl HandoffSlot for MemorySlot {
    fn write(&self, image: &EncodedImage) -> Result<()> {
        let mut value = self
            .value
            .lock()
            .map_err(|_| Error::Slot("memory slot poisoned".into()))?;
        *value = Some(image.clone());
        Ok(())
    }

    fn read(&self) -> Result<Option<EncodedImage>> {
        let value = self
            .value
            .lock()
            .map_err(|_| Error::Slot("memory slot poisoned".into()))?;
        Ok(value.clone())
    }
}
