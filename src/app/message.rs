// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{Error, ServiceError};
use crate::media::{GeneratedImage, SourceImage};
use crate::service::Validation;
use crate::ui::selector;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward user
/// intents and async results into the single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Trigger the open-photo dialog.
    OpenPhotoDialog,
    /// Result from the open-photo dialog.
    PhotoDialogResult(Option<PathBuf>),
    /// A photo file was read (and sniffed) off the UI thread.
    PhotoLoaded(Result<SourceImage, Error>),
    /// The validate call resolved. Tagged with the session generation at
    /// dispatch time so stale replies can be discarded.
    ValidationResolved {
        generation: u64,
        result: Result<Validation, ServiceError>,
    },
    /// Destination selector interactions (tabs, search, picks).
    Selector(selector::Message),
    /// User asked for the makeover.
    RequestTransform,
    /// The transform call resolved.
    TransformResolved {
        generation: u64,
        result: Result<GeneratedImage, ServiceError>,
    },
    /// Run the transform again with the same photo and destination.
    Regenerate,
    /// Back to the selector, keeping the photo.
    PickNewDestination,
    /// Full reset: new photo from scratch.
    Reset,
    /// Trigger the save dialog for the generated image.
    SaveResult,
    /// Result from the save dialog.
    SaveDialogResult(Option<PathBuf>),
    /// The generated image was written to disk (or not).
    SaveCompleted(Result<PathBuf, Error>),
    /// Periodic tick rotating the loading phrases while a call is in flight.
    LoadingTick,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional portrait path to submit on startup.
    pub file_path: Option<String>,
}
