// SPDX-License-Identifier: MPL-2.0
//! Upload and simulated generation widget.
//!
//! The widget walks through [`GenerationPhase`] once: an image is accepted,
//! the generation animation runs for a fixed duration, and the result is
//! written to the handoff slot before the mockup screen is shown.
//!
//! Time is passed into [`State::update`] so every transition can be driven
//! from tests without a runtime.

mod messages;
mod view;

pub use messages::{Event, Message};
pub use view::ViewContext;

use crate::application::port::{GenerationStrategy, HandoffSlot};
use crate::config::{Config, PROGRESS_COMPLETE};
use crate::domain::generation::GenerationPhase;
use crate::error::Result;
use crate::media::LoadedImage;
use crate::ui::state::GenerationTimeline;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Window in which further dropped files belong to the same drop gesture.
const DROP_BATCH_WINDOW: Duration = Duration::from_millis(250);

/// Settings the widget reads from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub duration: Duration,
    pub require_result_upload: bool,
    pub template_name: String,
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            duration: config.generation_duration(),
            require_result_upload: config.require_result_upload(),
            template_name: config.template_name(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Local UI state for the upload screen.
pub struct State {
    phase: GenerationPhase,
    working: Option<LoadedImage>,
    processed: Option<LoadedImage>,
    result: Option<LoadedImage>,
    timeline: Option<GenerationTimeline>,
    progress: u8,
    highlighted: bool,
    drop_batch_started: Option<Instant>,
    template_name: String,
    prompt: String,
    settings: Settings,
    strategy: Arc<dyn GenerationStrategy>,
    slot: Arc<dyn HandoffSlot>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("phase", &self.phase)
            .field("progress", &self.progress)
            .field("highlighted", &self.highlighted)
            .field("has_working", &self.working.is_some())
            .field("has_result", &self.result.is_some())
            .field("strategy", &self.strategy.name())
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(
        settings: Settings,
        strategy: Arc<dyn GenerationStrategy>,
        slot: Arc<dyn HandoffSlot>,
    ) -> Self {
        Self {
            phase: GenerationPhase::Idle,
            working: None,
            processed: None,
            result: None,
            timeline: None,
            progress: 0,
            highlighted: false,
            drop_batch_started: None,
            template_name: settings.template_name.clone(),
            prompt: String::new(),
            settings,
            strategy,
            slot,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::DropZonePressed => {
                if self.phase.accepts_files() {
                    Event::OpenImageDialog
                } else {
                    Event::None
                }
            }
            Message::FileHovered => {
                self.drag_enter();
                Event::None
            }
            Message::FilesHoveredLeft => {
                self.drag_leave(false);
                Event::None
            }
            Message::FileDropped(path) => {
                if self.drop_file(now) {
                    Event::ReadDroppedFile(path)
                } else {
                    Event::None
                }
            }
            Message::ImageFileLoaded(image) => {
                if let Some(image) = image {
                    self.accept_image(image);
                }
                Event::None
            }
            Message::UploadResultPressed => {
                if self.result.is_none() {
                    Event::OpenResultDialog
                } else {
                    Event::None
                }
            }
            Message::ResultFileLoaded(image) => match image.map(|image| self.supply_result(image)) {
                Some(Err(error)) => Event::HandoffFailed(error),
                _ => Event::None,
            },
            Message::StartGeneration => {
                self.start_generation(now);
                Event::None
            }
            Message::Frame => {
                self.tick(now);
                Event::None
            }
            Message::Proceed => match self.proceed_to_next_screen() {
                Ok(true) => Event::ProceedToMockup,
                Ok(false) => Event::None,
                Err(error) => Event::HandoffFailed(error),
            },
            Message::TemplateNameChanged(name) => {
                self.template_name = name;
                Event::None
            }
            Message::PromptChanged(prompt) => {
                self.prompt = prompt;
                Event::None
            }
        }
    }

    /// Accepts a decoded image as the working image.
    ///
    /// Returns `false` and leaves the state untouched once generation has
    /// started or when the strategy output cannot be decoded.
    pub fn accept_image(&mut self, working: LoadedImage) -> bool {
        if !self.phase.accepts_files() {
            log::debug!("ignoring image while {:?}", self.phase);
            return false;
        }
        let processed = match self.run_strategy(&working) {
            Ok(image) => image,
            Err(error) => {
                log::warn!(
                    "{} produced an undecodable image: {error}",
                    self.strategy.name()
                );
                return false;
            }
        };

        log::debug!(
            "accepted image ({}, {}x{})",
            working.encoded.content_type(),
            working.display.width,
            working.display.height
        );
        self.working = Some(working);
        self.processed = Some(processed);
        self.phase = GenerationPhase::ImageSelected;
        true
    }

    /// Sets the externally supplied result and writes it to the handoff slot.
    ///
    /// Ignored once a result exists.
    ///
    /// # Errors
    ///
    /// Returns the slot error if the handoff write fails. The result is
    /// still kept in the widget.
    pub fn supply_result(&mut self, result: LoadedImage) -> Result<bool> {
        if self.result.is_some() {
            log::debug!("result already present, ignoring new one");
            return Ok(false);
        }

        log::debug!("result image supplied ({} bytes)", result.encoded.len());
        let write = self.slot.write(&result.encoded);
        self.result = Some(result);
        write.map(|()| true)
    }

    /// Starts the generation animation at `now`.
    ///
    /// Returns `false` when the prerequisites are not met.
    pub fn start_generation(&mut self, now: Instant) -> bool {
        if !self.can_start_generation() {
            log::debug!("generation not started in {:?}", self.phase);
            return false;
        }
        self.timeline = Some(GenerationTimeline::new(now, self.settings.duration));
        self.progress = 0;
        self.phase = GenerationPhase::Generating;
        log::debug!(
            "generation started ({} ms, {})",
            self.settings.duration.as_millis(),
            self.strategy.name()
        );
        true
    }

    /// Advances the animation. Returns `true` on the tick that completes it.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.phase.is_generating() {
            return false;
        }
        let Some(timeline) = self.timeline else {
            return false;
        };

        self.progress = self.progress.max(timeline.progress_at(now));
        if !timeline.is_complete(now) {
            return false;
        }

        self.progress = PROGRESS_COMPLETE;
        self.timeline = None;
        self.phase = GenerationPhase::Generated;
        if self.result.is_none() {
            self.result = self.generate_result();
        }
        log::debug!("generation completed");
        true
    }

    /// Writes the result to the handoff slot.
    ///
    /// Returns `Ok(false)` when not yet generated or no result exists.
    ///
    /// # Errors
    ///
    /// Returns the slot error if the write fails.
    pub fn proceed_to_next_screen(&self) -> Result<bool> {
        match (&self.result, self.phase) {
            (Some(result), GenerationPhase::Generated) => {
                self.slot.write(&result.encoded)?;
                log::debug!("result handed off ({} bytes)", result.encoded.len());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// A file drag entered the window.
    pub fn drag_enter(&mut self) {
        if !self.phase.accepts_files() {
            return;
        }
        if !self.highlighted {
            self.drop_batch_started = None;
        }
        self.highlighted = true;
    }

    /// The drag left the drop target, unless `still_inside` says the pointer
    /// only moved onto a child.
    pub fn drag_leave(&mut self, still_inside: bool) {
        if !still_inside {
            self.highlighted = false;
        }
    }

    /// A file was dropped. Returns `true` if it is the first file of the
    /// gesture and should be read.
    pub fn drop_file(&mut self, now: Instant) -> bool {
        self.highlighted = false;
        if !self.phase.accepts_files() {
            return false;
        }
        let same_gesture = self
            .drop_batch_started
            .is_some_and(|started| now.saturating_duration_since(started) < DROP_BATCH_WINDOW);
        if same_gesture {
            log::debug!("ignoring additional dropped file");
            return false;
        }
        self.drop_batch_started = Some(now);
        true
    }

    #[must_use]
    pub fn can_start_generation(&self) -> bool {
        self.phase == GenerationPhase::ImageSelected
            && self.working.is_some()
            && (self.result.is_some() || !self.settings.require_result_upload)
    }

    #[must_use]
    pub fn can_proceed(&self) -> bool {
        self.phase.is_generated() && self.result.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase.is_generating()
    }

    #[must_use]
    pub fn working_image(&self) -> Option<&LoadedImage> {
        self.working.as_ref()
    }

    #[must_use]
    pub fn processed_image(&self) -> Option<&LoadedImage> {
        self.processed.as_ref()
    }

    #[must_use]
    pub fn result_image(&self) -> Option<&LoadedImage> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Caption shown while the animation runs.
    #[must_use]
    pub fn generating_label(&self) -> String {
        self.template_name.to_uppercase()
    }

    fn run_strategy(&self, input: &LoadedImage) -> Result<LoadedImage> {
        let output = self.strategy.generate(&input.encoded);
        if output.shares_buffer_with(&input.encoded) {
            return Ok(LoadedImage {
                encoded: output,
                display: input.display.clone(),
            });
        }
        LoadedImage::decode(output)
    }

    fn generate_result(&self) -> Option<LoadedImage> {
        let working = self.working.as_ref()?;
        match self.run_strategy(working) {
            Ok(result) => Some(result),
            Err(error) => {
                log::warn!("{} result could not be decoded: {error}", self.strategy.name());
                None
            }
        }
    }
}
