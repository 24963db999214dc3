// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::upload::{BatchId, FileRecord, RecordId};
use crate::error::UploadError;
use crate::ui::confirm;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::preview;
use crate::ui::upload_zone;
use crate::upload::assets::AssetError;
use crate::upload::Inspection;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    UploadZone(upload_zone::Message),
    Gallery(gallery::Message),
    Preview(preview::Message),
    Confirm(confirm::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
    /// Files are being dragged over the window.
    FilesHovered,
    /// The drag left the window without a drop.
    FilesHoverLeft,
    /// A file was dropped on the window. One message per file.
    FileDropped(PathBuf),
    /// The drop settled; buffered paths become one batch.
    DropSettled,
    /// Result from the file picker.
    FilesPicked(Option<Vec<PathBuf>>),
    /// Metadata of a batch's paths was read.
    Inspected(Inspection),
    /// One request of a batch resolved.
    UploadFinished {
        batch: BatchId,
        file_name: String,
        result: Result<FileRecord, UploadError>,
    },
    ThumbnailLoaded(RecordId, Result<Vec<u8>, AssetError>),
    PreviewLoaded(RecordId, Result<Vec<u8>, AssetError>),
    /// Result from the download save dialog.
    DownloadTarget {
        record_id: RecordId,
        path: Option<PathBuf>,
    },
    DownloadFinished(Result<(PathBuf, u64), AssetError>),
    /// Re-read configuration from the error screen.
    RetryConfiguration,
    ToggleConfigDetails,
    EscapePressed,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CLOUDLIFT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Cloud name given on the command line.
    pub cloud_name: Option<String>,
    /// Upload preset given on the command line.
    pub upload_preset: Option<String>,
    /// Upload folder given on the command line.
    pub folder: Option<String>,
    /// Files uploaded as the first batch once configuration is valid.
    pub files: Vec<PathBuf>,
}
