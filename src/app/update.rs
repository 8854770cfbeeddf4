// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component events that need side effects (native dialogs, file reads,
//! navigation, notifications) are turned into [`Task`]s and state changes
//! here.

use super::{Message, Screen};
use crate::application::port::HandoffSlot;
use crate::media::{content_type, IncomingFile, LoadedImage};
use crate::ui::mockup::{self, Event as MockupEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::uploader::{self, Event as UploaderEvent};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub uploader: &'a mut uploader::State,
    pub mockup: &'a mut Option<mockup::State>,
    pub mockup_settings: &'a mockup::Settings,
    pub slot: &'a Arc<dyn HandoffSlot>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_uploader_message(
    ctx: &mut UpdateContext<'_>,
    message: uploader::Message,
    now: Instant,
) -> Task<Message> {
    match ctx.uploader.update(message, now) {
        UploaderEvent::None => Task::none(),
        UploaderEvent::OpenImageDialog => Task::perform(pick_image(), |image| {
            Message::Uploader(uploader::Message::ImageFileLoaded(image))
        }),
        UploaderEvent::OpenResultDialog => Task::perform(pick_image(), |image| {
            Message::Uploader(uploader::Message::ResultFileLoaded(image))
        }),
        UploaderEvent::ReadDroppedFile(path) => Task::perform(read_image(path), |image| {
            Message::Uploader(uploader::Message::ImageFileLoaded(image))
        }),
        UploaderEvent::ProceedToMockup => load_mockup(ctx.slot),
        UploaderEvent::HandoffFailed(error) => {
            log::warn!("handoff failed: {error}");
            ctx.notifications
                .push(Notification::error("notification-handoff-error"));
            Task::none()
        }
    }
}

pub fn handle_mockup_message(
    ctx: &mut UpdateContext<'_>,
    message: mockup::Message,
    now: Instant,
) -> Task<Message> {
    let Some(state) = ctx.mockup.as_mut() else {
        log::debug!("mockup message without a mounted mockup: {message:?}");
        return Task::none();
    };

    match state.update(message, now) {
        MockupEvent::None => {}
        MockupEvent::Back => {
            *ctx.mockup = None;
            *ctx.screen = Screen::Upload;
            log::debug!("back to upload screen");
        }
    }
    Task::none()
}

/// Periodic tick: expires the cart acknowledgment and old toasts.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    if let Some(state) = ctx.mockup.as_mut() {
        state.tick(now);
    }
    ctx.notifications.tick(now);
}

/// Reads the handoff slot off the UI thread for a new mockup mount.
fn load_mockup(slot: &Arc<dyn HandoffSlot>) -> Task<Message> {
    let slot = Arc::clone(slot);
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || mockup::read_overlay(slot.as_ref()))
                .await
                .unwrap_or_else(|error| {
                    log::warn!("handoff read task failed: {error}");
                    None
                })
        },
        Message::MockupLoaded,
    )
}

/// Mounts a fresh mockup with the overlay just read from the handoff slot.
pub fn show_mockup(ctx: &mut UpdateContext<'_>, overlay: Option<LoadedImage>) {
    let state = mockup::State::mount(overlay, ctx.mockup_settings.clone());
    if state.overlay().is_none() {
        ctx.notifications
            .push(Notification::warning("notification-handoff-empty"));
    }
    *ctx.mockup = Some(state);
    *ctx.screen = Screen::Mockup;
    log::debug!("mockup screen mounted");
}

/// Reads and decodes a file for the upload widget, logging failures.
///
/// The decode runs on a blocking task so large images do not stall the UI.
pub async fn read_image(path: PathBuf) -> Option<LoadedImage> {
    let file = match IncomingFile::read(path.clone()).await {
        Ok(file) => file,
        Err(error) => {
            log::warn!("failed to read {}: {error}", path.display());
            return None;
        }
    };
    tokio::task::spawn_blocking(move || file.into_loaded_image())
        .await
        .unwrap_or_else(|error| {
            log::warn!("decode task for {} failed: {error}", path.display());
            None
        })
}

async fn pick_image() -> Option<LoadedImage> {
    let extensions = content_type::image_extensions();
    let handle = rfd::AsyncFileDialog::new()
        .add_filter("Images", &extensions)
        .pick_file()
        .await?;
    read_image(handle.path().to_path_buf()).await
}
