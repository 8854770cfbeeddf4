// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the upload and mockup
//! screens.
//!
//! The `App` struct wires the concrete adapters (handoff slot, generation
//! strategy) into the screens and translates their events into side effects
//! like native dialogs, file reads, navigation and toast notifications.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::{GenerationStrategy, HandoffSlot};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{FileSlot, MemorySlot, PassThrough};
use crate::ui::mockup;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ColorScheme;
use crate::ui::uploader;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    uploader: uploader::State,
    /// Mounted only while the mockup screen is shown.
    mockup: Option<mockup::State>,
    mockup_settings: mockup::Settings,
    slot: Arc<dyn HandoffSlot>,
    /// Resolved once at startup; `ThemeMode::System` queries the OS.
    theme: Theme,
    colors: ColorScheme,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("phase", &self.uploader.phase())
            .field("mockup_mounted", &self.mockup.is_some())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the handoff slot backend: a file in the data directory, or an
/// in-process slot when no data directory can be resolved.
fn default_slot() -> Arc<dyn HandoffSlot> {
    match paths::get_app_data_dir() {
        Some(dir) => {
            log::info!("handoff slot directory: {}", dir.display());
            Arc::new(FileSlot::new(dir))
        }
        None => {
            log::warn!("no data directory available, handoff slot kept in memory");
            Arc::new(MemorySlot::new())
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off loading of a
    /// demo result based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let strategy: Arc<dyn GenerationStrategy> = Arc::new(PassThrough);
        let mut app = Self::with_parts(flags.lang, &config, strategy, default_slot());

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = match flags.demo_result {
            Some(path) => Task::perform(update::read_image(PathBuf::from(path)), |image| {
                Message::Uploader(uploader::Message::ResultFileLoaded(image))
            }),
            None => Task::none(),
        };

        (app, task)
    }

    fn with_parts(
        lang: Option<String>,
        config: &Config,
        strategy: Arc<dyn GenerationStrategy>,
        slot: Arc<dyn HandoffSlot>,
    ) -> Self {
        let theme_mode = config.general.theme_mode;
        let uploader = uploader::State::new(
            uploader::Settings::from_config(config),
            strategy,
            Arc::clone(&slot),
        );

        Self {
            i18n: I18n::new(lang, config),
            screen: Screen::default(),
            uploader,
            mockup: None,
            mockup_settings: mockup::Settings::from_config(config),
            slot,
            theme: theme_mode.iced_theme(),
            colors: theme_mode.colors(),
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let frame_sub = subscription::create_frame_subscription(self.uploader.is_animating());
        let tick_sub = subscription::create_tick_subscription(
            self.mockup.as_ref().is_some_and(mockup::State::needs_tick),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, frame_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            uploader: &mut self.uploader,
            mockup: &mut self.mockup,
            mockup_settings: &self.mockup_settings,
            slot: &self.slot,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Uploader(uploader_message) => {
                update::handle_uploader_message(&mut ctx, uploader_message, Instant::now())
            }
            Message::Mockup(mockup_message) => {
                update::handle_mockup_message(&mut ctx, mockup_message, Instant::now())
            }
            Message::MockupLoaded(overlay) => {
                update::show_mockup(&mut ctx, overlay);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Frame(now) => {
                update::handle_uploader_message(&mut ctx, uploader::Message::Frame, now)
            }
            Message::Tick(now) => {
                update::handle_tick(&mut ctx, now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            colors: &self.colors,
            uploader: &self.uploader,
            mockup: self.mockup.as_ref(),
            notifications: &self.notifications,
        })
    }

    /// Current screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::GenerationPhase;
    use crate::error::{Error, Result};
    use crate::media::image::fixtures;
    use crate::media::{EncodedImage, LoadedImage};
    use std::time::Duration;

    struct FailingSlot;

    impl HandoffSlot for FailingSlot {
        fn write(&self, _image: &EncodedImage) -> Result<()> {
            Err(Error::Slot("disk full".into()))
        }

        fn read(&self) -> Result<Option<EncodedImage>> {
            Ok(None)
        }
    }

    fn app_with_slot(slot: Arc<dyn HandoffSlot>) -> App {
        App::with_parts(
            Some("en-US".into()),
            &Config::default(),
            Arc::new(PassThrough),
            slot,
        )
    }

    fn png_image() -> LoadedImage {
        LoadedImage::decode(fixtures::png(8, 8)).expect("decode fixture")
    }

    /// Runs the upload flow up to a completed generation with a supplied
    /// result.
    fn generate(app: &mut App) {
        let _ = app.update(Message::Uploader(uploader::Message::ImageFileLoaded(Some(
            png_image(),
        ))));
        let _ = app.update(Message::Uploader(uploader::Message::ResultFileLoaded(
            Some(png_image()),
        )));
        let _ = app.update(Message::Uploader(uploader::Message::StartGeneration));
        let _ = app.update(Message::Frame(Instant::now() + Duration::from_secs(5)));
    }

    /// Proceeds and delivers the slot read that the runtime performs for
    /// the returned task.
    fn proceed(app: &mut App) {
        let _ = app.update(Message::Uploader(uploader::Message::Proceed));
        let overlay = mockup::read_overlay(app.slot.as_ref());
        let _ = app.update(Message::MockupLoaded(overlay));
    }

    #[test]
    fn starts_on_upload_screen() {
        let app = app_with_slot(Arc::new(MemorySlot::new()));
        assert_eq!(app.screen(), Screen::Upload);
        assert!(app.mockup.is_none());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn proceed_mounts_mockup_with_handed_off_result() {
        let mut app = app_with_slot(Arc::new(MemorySlot::new()));
        generate(&mut app);
        assert_eq!(app.uploader.phase(), GenerationPhase::Generated);

        let _ = app.update(Message::Uploader(uploader::Message::Proceed));
        // Mounting waits for the slot read task.
        assert_eq!(app.screen(), Screen::Upload);

        let overlay = mockup::read_overlay(app.slot.as_ref());
        let _ = app.update(Message::MockupLoaded(overlay));

        assert_eq!(app.screen(), Screen::Mockup);
        let mockup = app.mockup.as_ref().expect("mockup mounted");
        assert!(mockup.overlay().is_some());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn failed_handoff_stays_on_upload_and_shows_toast() {
        let mut app = app_with_slot(Arc::new(FailingSlot));
        generate(&mut app);
        // Supplying the result already tried to write once.
        assert!(app.notifications.has_notifications());

        let before = app.notifications.visible_count();
        let _ = app.update(Message::Uploader(uploader::Message::Proceed));

        assert_eq!(app.screen(), Screen::Upload);
        assert!(app.mockup.is_none());
        assert_eq!(app.notifications.visible_count(), before + 1);
    }

    #[test]
    fn back_returns_to_upload_and_drops_mockup() {
        let mut app = app_with_slot(Arc::new(MemorySlot::new()));
        generate(&mut app);
        proceed(&mut app);

        let _ = app.update(Message::Mockup(mockup::Message::Back));

        assert_eq!(app.screen(), Screen::Upload);
        assert!(app.mockup.is_none());
    }

    #[test]
    fn mockup_messages_without_mount_are_ignored() {
        let mut app = app_with_slot(Arc::new(MemorySlot::new()));
        let _ = app.update(Message::Mockup(mockup::Message::Rotate));
        assert_eq!(app.screen(), Screen::Upload);
    }

    #[test]
    fn tick_clears_cart_acknowledgment() {
        let mut app = app_with_slot(Arc::new(MemorySlot::new()));
        generate(&mut app);
        proceed(&mut app);
        let _ = app.update(Message::Mockup(mockup::Message::AddToCart));
        assert!(app.mockup.as_ref().is_some_and(mockup::State::is_cart_added));

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(60)));

        assert!(!app.mockup.as_ref().is_some_and(mockup::State::is_cart_added));
    }

    #[test]
    fn proceed_before_generation_is_a_no_op() {
        let mut app = app_with_slot(Arc::new(MemorySlot::new()));
        let _ = app.update(Message::Uploader(uploader::Message::Proceed));

        assert_eq!(app.screen(), Screen::Upload);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn mounting_empty_slot_warns() {
        let mut app = app_with_slot(Arc::new(MemorySlot::new()));
        let overlay = mockup::read_overlay(app.slot.as_ref());

        let _ = app.update(Message::MockupLoaded(overlay));

        assert_eq!(app.screen, Screen::Mockup);
        assert!(app.mockup.as_ref().is_some_and(|m| m.overlay().is_none()));
        assert!(app.notifications.has_notifications());
    }
}
