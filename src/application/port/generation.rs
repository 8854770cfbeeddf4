// SPDX-License-Identifier: MPL-2.0
//! Generation port definition.
//!
//! The upload widget's progress animation is independent of what the
//! generation step actually does. This trait is the seam where a real image
//! processing backend plugs in; the shipped adapter is an identity transform.

use crate::media::EncodedImage;

/// Port for the image "generation" step.
///
/// # Example
///
/// ```
/// use pixelweaver::application::port::GenerationStrategy;
/// use pixelweaver::infrastructure::PassThrough;
/// use pixelweaver::media::EncodedImage;
///
/// let input = EncodedImage::new("image/png", vec![1, 2, 3]);
/// let output = PassThrough.generate(&input);
/// assert_eq!(output, input);
/// ```
pub trait GenerationStrategy: Send + Sync {
    /// Produces the result image for `input`.
    fn generate(&self, input: &EncodedImage) -> EncodedImage;

    /// Short human-readable name used in logs.
    fn name(&self) -> &'static str;
}
