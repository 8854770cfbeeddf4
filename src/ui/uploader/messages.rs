// SPDX-License-Identifier: MPL-2.0
//! Upload widget message/event types.

use crate::error::Error;
use crate::media::LoadedImage;
use std::path::PathBuf;

/// Messages handled by the upload widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// The drop zone was clicked.
    DropZonePressed,
    /// A file is being dragged over the window.
    FileHovered,
    /// The dragged files left the window.
    FilesHoveredLeft,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// An image candidate finished loading and decoding (dialog or drop).
    ImageFileLoaded(Option<LoadedImage>),
    /// The "upload transparent PNG result" button was pressed.
    UploadResultPressed,
    /// A result candidate finished loading and decoding.
    ResultFileLoaded(Option<LoadedImage>),
    StartGeneration,
    /// Frame tick while generating.
    Frame,
    Proceed,
    TemplateNameChanged(String),
    PromptChanged(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the native dialog to pick the working image.
    OpenImageDialog,
    /// Open the native dialog to pick a result image.
    OpenResultDialog,
    /// Read a dropped file from disk.
    ReadDroppedFile(PathBuf),
    /// The result was written to the handoff slot; show the mockup.
    ProceedToMockup,
    /// Writing to the handoff slot failed.
    HandoffFailed(Error),
}
