// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with toasts stacked on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::mockup;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ColorScheme;
use crate::ui::uploader;
use iced::{
    widget::{Container, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub colors: &'a ColorScheme,
    pub uploader: &'a uploader::State,
    pub mockup: Option<&'a mockup::State>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Upload => view_uploader(ctx.uploader, ctx.i18n, ctx.colors),
        Screen::Mockup => view_mockup(ctx.mockup, ctx.i18n, ctx.colors),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_uploader<'a>(
    uploader: &'a uploader::State,
    i18n: &'a I18n,
    colors: &'a ColorScheme,
) -> Element<'a, Message> {
    uploader
        .view(uploader::ViewContext { i18n, colors })
        .map(Message::Uploader)
}

fn view_mockup<'a>(
    mockup: Option<&'a mockup::State>,
    i18n: &'a I18n,
    colors: &'a ColorScheme,
) -> Element<'a, Message> {
    if let Some(state) = mockup {
        state
            .view(mockup::ViewContext { i18n, colors })
            .map(Message::Mockup)
    } else {
        // Fallback if the mockup was never mounted
        Container::new(Text::new(i18n.tr("mockup-no-design")))
            .center(Length::Fill)
            .into()
    }
}
