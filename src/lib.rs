// SPDX-License-Identifier: MPL-2.0
//! `pixelweaver` stages a generated image and previews it on a t-shirt
//! mockup, built with the Iced GUI framework.
//!
//! The upload screen accepts an image, runs a simulated generation with a
//! progress animation and hands the result to the mockup screen through a
//! single-entry handoff slot. The mockup screen places that image on a
//! garment with drag, scale and rotate controls.

#![doc(html_root_url = "https://docs.rs/pixelweaver/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
