// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`file_slot`]: CBOR file in the data directory (implements [`HandoffSlot`])
//! - [`memory_slot`]: In-process slot (implements [`HandoffSlot`])
//! - [`pass_through`]: Identity generation (implements [`GenerationStrategy`])
//!
//! [`HandoffSlot`]: crate::application::port::HandoffSlot
//! [`GenerationStrategy`]: crate::application::port::GenerationStrategy

pub mod file_slot;
pub mod memory_slot;
pub mod pass_through;

pub use file_slot::FileSlot;
pub use memory_slot::MemorySlot;
pub use pass_through::PassThrough;
