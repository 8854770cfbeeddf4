// SPDX-License-Identifier: MPL-2.0
//! Identity generation adapter.

use crate::application::port::GenerationStrategy;
use crate::media::EncodedImage;

/// [`GenerationStrategy`] that returns its input unchanged.
///
/// The returned value shares the input's byte buffer, so no copy is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl GenerationStrategy for PassThrough {
    fn generate(&self, input: &EncodedImage) -> EncodedImage {
        input.clone()
    }

    fn name(&self) -> &'static str {
        "pass-through"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_identical_to_input() {
        let input = EncodedImage::new("image/webp", vec![4, 3, 2, 1]);
        let output = PassThrough.generate(&input);
        assert_eq!(output, input);
        assert!(output.shares_buffer_with(&input));
    }
}
