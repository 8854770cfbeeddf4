// SPDX-License-Identifier: MPL-2.0
//! Upload widget lifecycle.

/// Where the upload widget is in its one-way lifecycle.
///
/// `Idle -> ImageSelected -> Generating -> Generated`. There is no way back
/// short of restarting the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationPhase {
    /// Nothing accepted yet.
    #[default]
    Idle,
    /// A working image is present; generation may start.
    ImageSelected,
    /// The progress animation is running.
    Generating,
    /// Generation finished; the result may be handed off.
    Generated,
}

impl GenerationPhase {
    /// Returns true if new files (dialog or drop) are accepted.
    #[must_use]
    pub fn accepts_files(self) -> bool {
        matches!(self, Self::Idle | Self::ImageSelected)
    }

    #[must_use]
    pub fn is_generating(self) -> bool {
        matches!(self, Self::Generating)
    }

    #[must_use]
    pub fn is_generated(self) -> bool {
        matches!(self, Self::Generated)
    }
}
