// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports that the screens depend on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Screens (`ui`) depend on ports, never on concrete adapters
//! - Infrastructure implements the ports
//! - `app` wires the concrete adapters in at startup
//!
//! # Example
//!
//! ```ignore
//! use pixelweaver::application::port::{GenerationStrategy, HandoffSlot};
//! use pixelweaver::infrastructure::{FileSlot, PassThrough};
//!
//! let strategy: Arc<dyn GenerationStrategy> = Arc::new(PassThrough);
//! let slot: Arc<dyn HandoffSlot> = Arc::new(FileSlot::new(data_dir));
//! ```

pub mod port;
