// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`uploader`] - Image upload with simulated generation progress
//! - [`mockup`] - T-shirt compositor with drag, scale and rotate
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state values (drag, scale, rotation, timers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod mockup;
pub mod notifications;
pub mod state;
pub mod theming;
pub mod uploader;
