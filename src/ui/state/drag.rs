// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag of the overlay on the mockup canvas. The grab offset
//! is recorded when the drag starts so the overlay does not jump under the
//! pointer.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// `pointer - position` at the moment the drag started.
    grab_offset: Option<Vector>,
}

impl DragState {
    /// Starts a drag of an item currently at `position`.
    pub fn begin(&mut self, pointer: Point, position: Point) {
        self.grab_offset = Some(pointer - position);
    }

    /// Returns the new item position for `pointer`, or `None` if no drag is
    /// active.
    #[must_use]
    pub fn follow(&self, pointer: Point) -> Option<Point> {
        self.grab_offset.map(|offset| pointer - offset)
    }

    /// Stops the drag operation
    pub fn end(&mut self) {
        self.grab_offset = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }
}
