// SPDX-License-Identifier: MPL-2.0
//! T-shirt mockup compositor.
//!
//! The overlay image is read from the handoff slot once, when the screen is
//! mounted. Everything after that is local interaction state: position,
//! scale, rotation, garment color, size and the add-to-cart acknowledgment.

mod canvas;
mod garment;
mod layout;
mod messages;
mod view;

pub use garment::GarmentImages;
pub use layout::OverlayLayout;
pub use messages::{CanvasMessage, Event, Message};
pub use view::ViewContext;

use crate::application::port::HandoffSlot;
use crate::config::Config;
use crate::domain::mockup::{GarmentColor, ShirtSize};
use crate::media::LoadedImage;
use crate::ui::state::{DragState, RotationDegrees, ScaleFactor, TimedFlag};
use iced::{Point, Size};
use std::time::{Duration, Instant};

/// Settings the compositor reads from configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub cart_ack: Duration,
    pub garments: GarmentImages,
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            cart_ack: config.cart_ack_duration(),
            garments: GarmentImages::load(&config.mockup),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Local UI state for the mockup screen.
#[derive(Debug, Clone)]
pub struct State {
    overlay: Option<LoadedImage>,
    position: Point,
    scale: ScaleFactor,
    rotation: RotationDegrees,
    drag: DragState,
    color: GarmentColor,
    size: Option<ShirtSize>,
    cart: TimedFlag,
    settings: Settings,
}

/// Reads and decodes the handoff slot value.
///
/// An empty, unreadable or undecodable slot gives `None`. This blocks on
/// slot I/O and a full image decode.
#[must_use]
pub fn read_overlay(slot: &dyn HandoffSlot) -> Option<LoadedImage> {
    match slot.read() {
        Ok(Some(encoded)) => match LoadedImage::decode(encoded) {
            Ok(image) => Some(image),
            Err(error) => {
                log::warn!("handoff image could not be decoded: {error}");
                None
            }
        },
        Ok(None) => {
            log::debug!("handoff slot is empty");
            None
        }
        Err(error) => {
            log::warn!("handoff slot could not be read: {error}");
            None
        }
    }
}

impl State {
    /// Mounts the screen with the overlay read from the handoff slot.
    #[must_use]
    pub fn mount(overlay: Option<LoadedImage>, settings: Settings) -> Self {
        Self {
            overlay,
            position: Point::ORIGIN,
            scale: ScaleFactor::default(),
            rotation: RotationDegrees::default(),
            drag: DragState::default(),
            color: GarmentColor::default(),
            size: None,
            cart: TimedFlag::default(),
            settings,
        }
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Canvas(CanvasMessage::Pressed { pointer, container }) => {
                self.begin_drag(pointer, container);
            }
            Message::Canvas(CanvasMessage::Moved(pointer)) => {
                self.continue_drag(pointer);
            }
            Message::Canvas(CanvasMessage::Released) => self.end_drag(),
            Message::ZoomIn => self.scale = self.scale.zoom_in(),
            Message::ZoomOut => self.scale = self.scale.zoom_out(),
            Message::ScaleSliderChanged(value) => self.scale = ScaleFactor::from_slider(value),
            Message::Rotate => self.rotate(),
            Message::RotationSliderChanged(value) => {
                self.rotation = RotationDegrees::from_slider(value);
            }
            Message::SelectColor(color) => self.color = color,
            Message::SelectSize(size) => self.size = Some(size),
            Message::AddToCart => self.add_to_cart(now),
            Message::Tick => {
                self.tick(now);
            }
            Message::Back => return Event::Back,
        }
        Event::None
    }

    /// Starts dragging if `pointer` is on the overlay. Returns whether a
    /// drag started.
    pub fn begin_drag(&mut self, pointer: Point, container: Size) -> bool {
        if !self.overlay_contains(pointer, container) {
            return false;
        }
        self.drag.begin(pointer, self.position);
        true
    }

    /// Moves the overlay with the pointer while dragging.
    pub fn continue_drag(&mut self, pointer: Point) -> bool {
        match self.drag.follow(pointer) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    pub fn rotate(&mut self) {
        self.rotation = self.rotation.step();
    }

    /// Shows the "added" acknowledgment until the configured delay after the
    /// first press.
    pub fn add_to_cart(&mut self, now: Instant) {
        self.cart.expire(now);
        self.cart.raise(now, self.settings.cart_ack);
        log::debug!(
            "added to cart: {:?} {}",
            self.color,
            self.size.map_or_else(|| "-".to_string(), |size| size.to_string())
        );
    }

    /// Clears the acknowledgment once its deadline passed. Returns `true`
    /// when it was cleared by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.cart.expire(now)
    }

    /// Layout of the overlay for a container of `container` size.
    #[must_use]
    pub fn overlay_layout(&self, container: Size) -> Option<OverlayLayout> {
        self.overlay.as_ref().map(|overlay| {
            OverlayLayout::new(
                container,
                Size::new(overlay.display.width as f32, overlay.display.height as f32),
                self.position,
                self.scale.value(),
                self.rotation.radians(),
            )
        })
    }

    #[must_use]
    pub fn overlay_contains(&self, pointer: Point, container: Size) -> bool {
        self.overlay_layout(container)
            .is_some_and(|layout| layout.contains(pointer))
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&LoadedImage> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    #[must_use]
    pub fn rotation(&self) -> RotationDegrees {
        self.rotation
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn color(&self) -> GarmentColor {
        self.color
    }

    #[must_use]
    pub fn size(&self) -> Option<ShirtSize> {
        self.size
    }

    #[must_use]
    pub fn is_cart_added(&self) -> bool {
        self.cart.is_raised()
    }

    /// Whether the screen needs periodic ticks.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.cart.is_raised()
    }

    #[must_use]
    pub fn garments(&self) -> &GarmentImages {
        &self.settings.garments
    }
}
