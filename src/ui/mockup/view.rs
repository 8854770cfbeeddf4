// SPDX-License-Identifier: MPL-2.0
//! Mockup screen layout: canvas on the left, controls on the right.

use super::canvas::MockupCanvas;
use super::{Message, State};
use crate::config::{FULL_TURN_DEGREES, ROTATION_STEP_DEGREES, SCALE_SLIDER_MAX, SCALE_SLIDER_MIN};
use crate::domain::mockup::{GarmentColor, ShirtSize};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, canvas, column, row, slider, text, Column, Container, Row};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let stage = canvas(MockupCanvas {
            state: self,
            stage: ctx.colors.stage,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let stage = Container::new(stage)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD);

        row![stage, self.controls(ctx.i18n)]
            .height(Length::Fill)
            .into()
    }

    fn controls<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = column![
            button(text(i18n.tr("mockup-back-button")))
                .on_press(Message::Back)
                .style(button::text),
            text(i18n.tr("mockup-title")).size(typography::TITLE_SM),
        ]
        .spacing(spacing::XS);

        let mut panel = Column::new().spacing(spacing::LG).push(header);

        if self.overlay().is_none() {
            panel = panel.push(text(i18n.tr("mockup-no-design")).size(typography::CAPTION));
        }

        let scale = self.scale();
        let percent = (scale.value() * 100.0).round().to_string();
        panel = panel.push(section(
            i18n.tr_with_args("mockup-scale-label", &[("percent", percent.as_str())]),
            row![
                button(text("−"))
                    .on_press_maybe((!scale.is_min()).then_some(Message::ZoomOut))
                    .style(button::secondary),
                slider(
                    SCALE_SLIDER_MIN..=SCALE_SLIDER_MAX,
                    scale.slider_value(),
                    Message::ScaleSliderChanged
                ),
                button(text("+"))
                    .on_press_maybe((!scale.is_max()).then_some(Message::ZoomIn))
                    .style(button::secondary),
            ]
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .into(),
        ));

        let degrees = self.rotation().degrees().to_string();
        panel = panel.push(section(
            i18n.tr_with_args("mockup-rotation-label", &[("degrees", degrees.as_str())]),
            row![
                slider(
                    0.0..=f32::from(FULL_TURN_DEGREES),
                    f32::from(self.rotation().degrees()),
                    Message::RotationSliderChanged
                )
                .step(f32::from(ROTATION_STEP_DEGREES)),
                button(text(i18n.tr("mockup-rotate-button")))
                    .on_press(Message::Rotate)
                    .style(button::secondary),
            ]
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .into(),
        ));

        let colors = GarmentColor::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, &color| {
                row.push(choice(
                    i18n.tr(color.label_key()),
                    self.color() == color,
                    Message::SelectColor(color),
                ))
            },
        );
        panel = panel.push(section(i18n.tr("mockup-color-label"), colors.into()));

        let sizes = ShirtSize::ALL
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, &size| {
                row.push(choice(
                    size.to_string(),
                    self.size() == Some(size),
                    Message::SelectSize(size),
                ))
            });
        panel = panel.push(section(i18n.tr("mockup-size-label"), sizes.into()));

        let cart_label = if self.is_cart_added() {
            i18n.tr("mockup-cart-added")
        } else {
            i18n.tr("mockup-cart-button")
        };
        panel = panel.push(
            button(text(cart_label).size(typography::BODY_LG))
                .on_press(Message::AddToCart)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT + spacing::XS)),
        );

        Container::new(panel)
            .width(Length::Fixed(sizing::CONTROL_PANEL_WIDTH))
            .height(Length::Fill)
            .padding(spacing::MD)
            .into()
    }
}

fn section<'a>(label: String, body: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(typography::BODY), body]
        .spacing(spacing::XS)
        .into()
}

fn choice<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    button(text(label))
        .on_press(message)
        .style(move |theme, status| {
            if selected {
                button::primary(theme, status)
            } else {
                button::secondary(theme, status)
            }
        })
        .into()
}
