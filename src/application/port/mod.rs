// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`generation`]: The "generation" step that turns an uploaded image into
//!   a result image
//! - [`handoff`]: The single-entry store that carries a result image from
//!   the upload screen to the mockup screen
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared behind `Arc`
//! - No `async fn` - callers wrap slow work in Iced `Task`s

pub mod generation;
pub mod handoff;

pub use generation::GenerationStrategy;
pub use handoff::{HandoffSlot, HANDOFF_KEY};
