// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`generation`]: Upload widget lifecycle ([`GenerationPhase`](generation::GenerationPhase))
//! - [`mockup`]: Garment options ([`GarmentColor`](mockup::GarmentColor),
//!   [`ShirtSize`](mockup::ShirtSize))

pub mod generation;
pub mod mockup;
