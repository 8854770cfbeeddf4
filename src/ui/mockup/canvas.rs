// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the garment and the overlay.

use super::garment;
use super::{CanvasMessage, Message, State};
use crate::ui::design_tokens::{border, palette};
use iced::widget::canvas::{self, Frame, Geometry, Stroke};
use iced::widget::Action;
use iced::{mouse, Color, Rectangle, Renderer, Theme};

pub struct MockupCanvas<'a> {
    pub state: &'a State,
    pub stage: Color,
}

impl canvas::Program<Message> for MockupCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let publish = |message: CanvasMessage| {
            Some(Action::publish(Message::Canvas(message)).and_capture())
        };

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let pointer = cursor.position_in(bounds)?;
                if self.state.overlay_contains(pointer, bounds.size()) {
                    return publish(CanvasMessage::Pressed {
                        pointer,
                        container: bounds.size(),
                    });
                }
                None
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if self.state.is_dragging() => {
                match cursor.position_in(bounds) {
                    Some(pointer) => publish(CanvasMessage::Moved(pointer)),
                    None => publish(CanvasMessage::Released),
                }
            }
            iced::Event::Mouse(
                mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft,
            ) if self.state.is_dragging() => publish(CanvasMessage::Released),
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), self.stage);

        self.draw_garment(&mut frame, bounds);

        if let (Some(overlay), Some(layout)) = (
            self.state.overlay(),
            self.state.overlay_layout(bounds.size()),
        ) {
            frame.with_save(|frame| {
                frame.translate(layout.translation());
                frame.scale(layout.scale);
                frame.rotate(layout.rotation);
                frame.draw_image(
                    layout.local_bounds(),
                    canvas::Image::new(overlay.display.handle.clone()),
                );
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.state.is_dragging() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(pointer) if self.state.overlay_contains(pointer, bounds.size()) => {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }
}

impl MockupCanvas<'_> {
    fn draw_garment(&self, frame: &mut Frame, bounds: Rectangle) {
        let color = self.state.color();
        if let Some(photo) = self.state.garments().for_color(color) {
            frame.draw_image(
                garment::fit_contain(bounds.size(), photo),
                canvas::Image::new(photo.handle.clone()),
            );
            return;
        }

        let shirt = garment::silhouette(garment::silhouette_area(bounds.size()));
        frame.fill(&shirt, garment::fill_color(color));
        frame.stroke(
            &shirt,
            Stroke::default()
                .with_color(palette::GARMENT_OUTLINE)
                .with_width(border::WIDTH_SM),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemorySlot;
    use crate::media::image::fixtures;
    use crate::ui::mockup::{read_overlay, Settings};
    use iced::{Point, Size, Vector};
    use iced::widget::canvas::Program;

    fn canvas_bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(400.0, 400.0))
    }

    fn mounted() -> State {
        let slot = MemorySlot::with_value(fixtures::png(100, 100));
        State::mount(read_overlay(&slot), Settings::default())
    }

    #[test]
    fn press_on_overlay_is_published() {
        let state = mounted();
        let program = MockupCanvas {
            state: &state,
            stage: palette::GRAY_200,
        };
        let event = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        let action = program.update(
            &mut (),
            &event,
            canvas_bounds(),
            mouse::Cursor::Available(Point::new(200.0, 200.0)),
        );

        assert!(action.is_some());
    }

    #[test]
    fn press_off_overlay_is_ignored() {
        let state = mounted();
        let program = MockupCanvas {
            state: &state,
            stage: palette::GRAY_200,
        };
        let event = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        let action = program.update(
            &mut (),
            &event,
            canvas_bounds(),
            mouse::Cursor::Available(Point::new(5.0, 5.0)),
        );

        assert!(action.is_none());
    }

    #[test]
    fn moves_are_ignored_when_not_dragging() {
        let state = mounted();
        let program = MockupCanvas {
            state: &state,
            stage: palette::GRAY_200,
        };
        let event = iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(200.0, 200.0),
        });

        let action = program.update(
            &mut (),
            &event,
            canvas_bounds(),
            mouse::Cursor::Available(Point::new(200.0, 200.0)),
        );

        assert!(action.is_none());
    }

    #[test]
    fn overlay_starts_at_canvas_centre() {
        let layout = mounted().overlay_layout(Size::new(400.0, 400.0)).expect("layout");
        assert_eq!(layout.translation(), Vector::new(200.0, 200.0));
    }
}
