// SPDX-License-Identifier: MPL-2.0
//! Upload screen layout.

use super::{Message, State};
use crate::domain::generation::GenerationPhase;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{border, opacity, radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, column, container, image, mouse_area, progress_bar, row, text, text_input, Column,
    Container,
};
use iced::{alignment, Color, ContentFit, Element, Length, Theme};

/// Contextual data needed to render the upload screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let title = text(i18n.tr("upload-title")).size(typography::TITLE_LG);

        let fields = row![
            text_input(&i18n.tr("upload-template-placeholder"), self.template_name())
                .on_input(Message::TemplateNameChanged)
                .size(typography::BODY),
            text_input(&i18n.tr("upload-prompt-placeholder"), self.prompt())
                .on_input(Message::PromptChanged)
                .size(typography::BODY),
        ]
        .spacing(spacing::SM);

        let mut actions = row![].spacing(spacing::SM);
        if self.result_image().is_none() {
            actions = actions.push(
                button(text(i18n.tr("upload-result-button")))
                    .on_press(Message::UploadResultPressed)
                    .style(button::secondary),
            );
        }
        actions = actions
            .push(
                button(text(i18n.tr("upload-generate-button")))
                    .on_press_maybe(self.can_start_generation().then_some(Message::StartGeneration)),
            )
            .push(
                button(text(i18n.tr("upload-proceed-button")))
                    .on_press_maybe(self.can_proceed().then_some(Message::Proceed)),
            );

        let content = column![
            title,
            self.drop_zone(&ctx),
            fields,
            actions,
        ]
        .spacing(spacing::MD)
        .max_width(720.0)
        .align_x(alignment::Horizontal::Center);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .into()
    }

    fn drop_zone<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let body: Element<'a, Message> = match self.phase() {
            GenerationPhase::Idle => text(i18n.tr("upload-drop-hint"))
                .size(typography::BODY_LG)
                .into(),
            GenerationPhase::ImageSelected => {
                let mut previews = row![].spacing(spacing::LG);
                if let Some(working) = self.working_image() {
                    previews = previews.push(labelled_preview(
                        &working.display,
                        i18n.tr("upload-original-label"),
                    ));
                }
                if let Some(processed) = self.processed_image() {
                    previews = previews.push(labelled_preview(
                        &processed.display,
                        i18n.tr("upload-preview-label"),
                    ));
                }
                column![
                    previews,
                    text(i18n.tr("upload-replace-hint")).size(typography::CAPTION)
                ]
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .into()
            }
            GenerationPhase::Generating => {
                let progress = f32::from(self.progress());
                column![
                    text(i18n.tr_with_args(
                        "upload-generating",
                        &[("template", self.generating_label().as_str())]
                    ))
                    .size(typography::TITLE_SM),
                    progress_bar(0.0..=100.0, progress)
                        .girth(sizing::PROGRESS_BAR_HEIGHT)
                        .length(Length::Fill),
                    text(format!("{}%", self.progress())).size(typography::CAPTION),
                ]
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .into()
            }
            GenerationPhase::Generated => match self.result_image() {
                Some(result) => {
                    labelled_preview(&result.display, i18n.tr("upload-result-label"))
                }
                None => text(i18n.tr("upload-result-missing")).into(),
            },
        };

        let highlighted = self.is_highlighted();
        let accent = ctx.colors.accent;
        let idle_border = ctx.colors.drop_zone_border;
        let zone = Container::new(body)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| {
                drop_zone_style(highlighted, accent, idle_border)
            });

        mouse_area(zone)
            .on_press(Message::DropZonePressed)
            .interaction(if self.phase().accepts_files() {
                iced::mouse::Interaction::Pointer
            } else {
                iced::mouse::Interaction::Idle
            })
            .into()
    }
}

fn labelled_preview<'a>(display: &ImageData, label: String) -> Element<'a, Message> {
    Column::new()
        .push(
            image(display.handle.clone())
                .width(Length::Fixed(sizing::PREVIEW_SIZE))
                .height(Length::Fixed(sizing::PREVIEW_SIZE * 0.75))
                .content_fit(ContentFit::Contain),
        )
        .push(text(label).size(typography::CAPTION))
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn drop_zone_style(highlighted: bool, accent: Color, idle_border: Color) -> container::Style {
    let (border_color, background) = if highlighted {
        (
            accent,
            Some(
                Color {
                    a: opacity::HIGHLIGHT,
                    ..accent
                }
                .into(),
            ),
        )
    } else {
        (idle_border, None)
    };

    container::Style {
        background,
        border: iced::Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
