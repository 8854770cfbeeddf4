// SPDX-License-Identifier: MPL-2.0
//! UI state value types.
//!
//! Small, self-contained pieces of interaction state shared by the screens.
//! Time-dependent types take the current [`std::time::Instant`] as a
//! parameter instead of reading the clock.

pub mod drag;
pub mod progress;
pub mod pulse;
pub mod rotation;
pub mod scale;

pub use drag::DragState;
pub use progress::GenerationTimeline;
pub use pulse::TimedFlag;
pub use rotation::RotationDegrees;
pub use scale::ScaleFactor;
