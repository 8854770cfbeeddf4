// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::LoadedImage;
use crate::ui::mockup;
use crate::ui::notifications;
use crate::ui::uploader;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Uploader(uploader::Message),
    Mockup(mockup::Message),
    /// The handoff slot was read for a new mockup mount.
    MockupLoaded(Option<LoadedImage>),
    Notification(notifications::NotificationMessage),
    /// Redraw frame while the generation animation runs.
    Frame(Instant),
    Tick(Instant), // Periodic tick for the cart pulse and toast auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for the handoff slot).
    /// Takes precedence over `PIXELWEAVER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PIXELWEAVER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional image preloaded as the generation result.
    pub demo_result: Option<String>,
}
