// SPDX-License-Identifier: MPL-2.0
//! Handoff slot port definition.
//!
//! The handoff slot is the only channel between the two screens. It holds at
//! most one image; every write replaces the previous value and nothing keeps
//! history.
//!
//! # Contract
//!
//! - `read` after `write(x)` returns exactly `x` (same content type, same bytes)
//! - `write(y)` after `write(x)` makes `read` return `y`, never `x`
//! - `read` on a slot that was never written returns `Ok(None)`
//!
//! Readers decide when to look: the mockup screen reads once when it is
//! mounted, so a write made after that is only seen by the next mount.

use crate::error::Result;
use crate::media::EncodedImage;

/// Fixed name of the single slot entry.
pub const HANDOFF_KEY: &str = "processedImage";

/// Port for the single-entry handoff store.
pub trait HandoffSlot: Send + Sync {
    /// Replaces the stored image.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn write(&self, image: &EncodedImage) -> Result<()>;

    /// Returns the stored image, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store exists but cannot be read or
    /// decoded.
    fn read(&self) -> Result<Option<EncodedImage>>;
}
