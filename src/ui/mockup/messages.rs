// SPDX-License-Identifier: MPL-2.0
//! Mockup screen message/event types.

use crate::domain::mockup::{GarmentColor, ShirtSize};
use iced::{Point, Size};

/// Pointer interaction published by the mockup canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasMessage {
    /// Left button pressed at `pointer` on a canvas of size `container`.
    Pressed { pointer: Point, container: Size },
    Moved(Point),
    /// Button released or pointer left the canvas.
    Released,
}

#[derive(Debug, Clone)]
pub enum Message {
    Canvas(CanvasMessage),
    ZoomIn,
    ZoomOut,
    ScaleSliderChanged(f32),
    Rotate,
    RotationSliderChanged(f32),
    SelectColor(GarmentColor),
    SelectSize(ShirtSize),
    AddToCart,
    /// Periodic tick while the cart acknowledgment is showing.
    Tick,
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Return to the upload screen.
    Back,
}
