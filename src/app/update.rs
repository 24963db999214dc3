// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the upload orchestration (drop buffering, batch
//! queueing, validation and result folding) and the handlers for every
//! component message.

use super::{config, persistence, Message, Screen};
use crate::domain::upload::validation;
use crate::domain::upload::{
    BatchId, BatchOutcome, Category, FailureKind, FileRecord, FileRegistry, RecordId, Rejection,
    UploadFailure, UploadTracker,
};
use crate::error::UploadError;
use crate::i18n::fluent::I18n;
use crate::ui::confirm::{self, PendingDeletion};
use crate::ui::gallery::{self, Event as GalleryEvent, ViewMode};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::preview;
use crate::ui::theming::ThemeMode;
use crate::ui::upload_zone;
use crate::upload::assets::{self, AssetError};
use crate::upload::extensions::PICKER_EXTENSIONS;
use crate::upload::{inspect_paths, Inspection, UploadCandidate, UploadClient, UploadSettings};
use iced::widget::image;
use iced::Task;
use lru::LruCache;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

/// How long to wait after the first dropped file for the rest of the drop.
///
/// The window reports one event per file; files of one drop arrive within
/// the same frame.
pub const DROP_SETTLE: Duration = Duration::from_millis(60);

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub overrides: &'a config::UploadOverrides,
    pub client: &'a mut Option<UploadClient>,
    pub config_error: &'a mut Option<UploadError>,
    pub config_details_visible: &'a mut bool,
    pub startup_files: &'a mut Vec<PathBuf>,
    pub registry: &'a mut FileRegistry,
    pub tracker: &'a mut UploadTracker,
    pub inspecting: &'a mut bool,
    pub pending_batches: &'a mut VecDeque<Vec<PathBuf>>,
    pub dropped: &'a mut Vec<PathBuf>,
    pub hovering: &'a mut bool,
    pub category: &'a mut Category,
    pub view_mode: &'a mut ViewMode,
    pub preview: &'a mut Option<preview::State>,
    pub pending_deletion: &'a mut Option<PendingDeletion>,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
    pub images: &'a mut LruCache<RecordId, image::Handle>,
}

// =============================================================================
// Configuration
// =============================================================================

/// Installs a client built from `settings`, or switches to the error screen.
///
/// Returns `true` when uploads are possible.
pub fn apply_upload_settings(ctx: &mut UpdateContext<'_>, settings: &UploadSettings) -> bool {
    match UploadClient::new(settings) {
        Ok(client) => {
            tracing::info!(endpoint = %client.endpoint(), folder = %settings.folder, "uploads enabled");
            *ctx.client = Some(client);
            *ctx.config_error = None;
            *ctx.screen = Screen::Gallery;
            true
        }
        Err(error) => {
            tracing::error!(%error, "upload configuration incomplete");
            *ctx.client = None;
            *ctx.config_error = Some(error);
            *ctx.screen = Screen::ConfigurationError;
            false
        }
    }
}

/// Re-reads the settings file and the environment.
///
/// On success the gallery becomes usable and files given on the command
/// line are uploaded.
pub fn handle_retry_configuration(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let (cfg, warning) = config::load();
    ctx.notifications.retract("notification-config-load-error");
    if let Some(key) = warning {
        ctx.notifications.push(Notification::warning(key));
    }

    let settings = config::resolve_upload_settings(&cfg.upload, ctx.overrides);
    if apply_upload_settings(ctx, &settings) {
        upload_startup_files(ctx)
    } else {
        Task::none()
    }
}

/// Uploads the files given on the command line, once.
pub fn upload_startup_files(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let files = std::mem::take(ctx.startup_files);
    if files.is_empty() {
        Task::none()
    } else {
        submit_paths(ctx, files)
    }
}

// =============================================================================
// Component Messages
// =============================================================================

/// Handles navbar messages.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.view_mode) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ChooseFiles => handle_open_file_dialog(ctx),
        NavbarEvent::ToggleTheme => handle_toggle_theme(ctx),
    }
}

/// Handles upload zone messages.
pub fn handle_upload_zone_message(
    ctx: &mut UpdateContext<'_>,
    message: upload_zone::Message,
) -> Task<Message> {
    match message {
        upload_zone::Message::ChooseFiles => handle_open_file_dialog(ctx),
    }
}

/// Handles gallery messages.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match gallery::update(message, ctx.category) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::Download(id) => handle_download_request(ctx, id),
        GalleryEvent::Preview(id) => handle_open_preview(ctx, id),
        GalleryEvent::CopyLink(id) => handle_copy_link(ctx, &id),
        GalleryEvent::RequestDelete(id) => {
            *ctx.pending_deletion = ctx.registry.get(&id).map(PendingDeletion::for_record);
            Task::none()
        }
    }
}

/// Handles preview overlay messages.
pub fn handle_preview_message(
    ctx: &mut UpdateContext<'_>,
    message: preview::Message,
) -> Task<Message> {
    match message {
        preview::Message::Close => {
            *ctx.preview = None;
            Task::none()
        }
        preview::Message::Download(id) => handle_download_request(ctx, id),
    }
}

/// Handles the delete confirmation dialog.
///
/// Deletion only hides the record locally; the hosted asset is untouched.
pub fn handle_confirm_message(
    ctx: &mut UpdateContext<'_>,
    message: confirm::Message,
) -> Task<Message> {
    let Some(pending) = ctx.pending_deletion.take() else {
        return Task::none();
    };

    if let confirm::Message::Confirm = message {
        if let Some(removed) = ctx.registry.remove(&pending.record_id) {
            ctx.images.pop(&removed.id);
            if ctx
                .preview
                .as_ref()
                .is_some_and(|state| state.record_id() == &removed.id)
            {
                *ctx.preview = None;
            }
            tracing::info!(id = %removed.id, file = %removed.original_name, "record removed");
            ctx.notifications.push(
                Notification::info("notification-file-removed")
                    .arg("file", removed.original_name),
            );
        }
    }
    Task::none()
}

/// Escape closes the preview first, then the delete dialog.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.preview.take().is_none() {
        *ctx.pending_deletion = None;
    }
    Task::none()
}

fn handle_toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.toggled();
    if let Some(key) = persistence::persist_theme(*ctx.theme_mode) {
        ctx.notifications.push(Notification::warning(key));
    }
    Task::none()
}

// =============================================================================
// Drop, Pick and Batch Lifecycle
// =============================================================================

/// Opens the native multi-file picker.
pub fn handle_open_file_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.client.is_none() {
        return Task::none();
    }

    let title = ctx.i18n.tr("files-dialog-title");
    let filter_name = ctx.i18n.tr("files-dialog-filter");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, PICKER_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::FilesPicked,
    )
}

/// Handles the picker result; a cancelled dialog does nothing.
pub fn handle_files_picked(ctx: &mut UpdateContext<'_>, paths: Option<Vec<PathBuf>>) -> Task<Message> {
    match paths {
        Some(paths) if !paths.is_empty() => submit_paths(ctx, paths),
        _ => Task::none(),
    }
}

/// Buffers a dropped path until the drop settles.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    *ctx.hovering = false;
    let first = ctx.dropped.is_empty();
    ctx.dropped.push(path);
    if first {
        Task::perform(tokio::time::sleep(DROP_SETTLE), |()| Message::DropSettled)
    } else {
        Task::none()
    }
}

/// Turns the buffered paths of one drop into a batch.
pub fn handle_drop_settled(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let paths = std::mem::take(ctx.dropped);
    if paths.is_empty() {
        Task::none()
    } else {
        submit_paths(ctx, paths)
    }
}

/// Starts a batch for `paths`, or queues it behind the batch in flight.
pub fn submit_paths(ctx: &mut UpdateContext<'_>, paths: Vec<PathBuf>) -> Task<Message> {
    if ctx.client.is_none() {
        tracing::warn!(files = paths.len(), "upload ignored: configuration incomplete");
        return Task::none();
    }

    if *ctx.inspecting || ctx.tracker.is_uploading() {
        ctx.pending_batches.push_back(paths);
        tracing::info!(queued = ctx.pending_batches.len(), "batch queued");
        return Task::none();
    }

    *ctx.inspecting = true;
    Task::perform(inspect_paths(paths), Message::Inspected)
}

/// Validates an inspected batch and sends the accepted files.
pub fn handle_inspected(ctx: &mut UpdateContext<'_>, inspection: Inspection) -> Task<Message> {
    *ctx.inspecting = false;
    let Inspection {
        candidates,
        unreadable,
    } = inspection;

    if !unreadable.is_empty() {
        let details = unreadable
            .iter()
            .map(|file| {
                tracing::warn!(file = %file.file_name, message = %file.message, "cannot read dropped file");
                format!("{}: {}", file.file_name, file.message)
            })
            .collect::<Vec<_>>()
            .join("\n");
        let error = UploadError::Unknown(details);
        ctx.notifications.push(
            Notification::error(error.i18n_key()).arg("details", error.to_string()),
        );
    }

    let (accepted, rejected) = validation::partition(candidates, UploadCandidate::as_candidate);
    if !rejected.is_empty() {
        tracing::info!(rejected = rejected.len(), "files refused before upload");
        let notification = validation_notification(ctx.i18n, UploadError::Validation(rejected));
        ctx.notifications.push(notification);
    }

    start_batch(ctx, accepted)
}

fn start_batch(ctx: &mut UpdateContext<'_>, accepted: Vec<UploadCandidate>) -> Task<Message> {
    let Some(client) = ctx.client.clone() else {
        return Task::none();
    };
    let Some(batch) = ctx.tracker.begin(accepted.len()) else {
        return start_next_batch(ctx);
    };
    tracing::info!(files = accepted.len(), "upload batch started");

    Task::batch(accepted.into_iter().map(|candidate| {
        let client = client.clone();
        let file_name = candidate.file_name.clone();
        Task::perform(
            async move { client.upload(candidate).await },
            move |result| Message::UploadFinished {
                batch,
                file_name: file_name.clone(),
                result,
            },
        )
    }))
}

fn start_next_batch(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.pending_batches.pop_front() {
        Some(paths) => submit_paths(ctx, paths),
        None => Task::none(),
    }
}

/// Folds one resolved request into its batch.
///
/// Successful records are appended as they arrive. When the last request
/// of the batch resolves the outcome is reported and the next queued batch
/// starts.
pub fn handle_upload_finished(
    ctx: &mut UpdateContext<'_>,
    batch: BatchId,
    file_name: String,
    result: Result<FileRecord, UploadError>,
) -> Task<Message> {
    let (folded, thumbnail) = match result {
        Ok(record) => {
            let thumbnail = if record.has_thumbnail() && !ctx.registry.contains(&record.id) {
                fetch_image(ctx, record.id.clone(), record.url.clone(), Message::ThumbnailLoaded)
            } else {
                Task::none()
            };
            if ctx.registry.append([record]) == 0 {
                tracing::debug!(file = %file_name, "duplicate record ignored");
            }
            (Ok(()), thumbnail)
        }
        Err(error) => {
            tracing::warn!(file = %file_name, %error, "upload failed");
            (Err(failure_of(file_name, &error)), Task::none())
        }
    };

    let Some(outcome) = ctx.tracker.record(batch, folded) else {
        return thumbnail;
    };
    report_outcome(ctx, &outcome);
    Task::batch([thumbnail, start_next_batch(ctx)])
}

fn failure_of(file_name: String, error: &UploadError) -> UploadFailure {
    match error {
        UploadError::Transfer { message, .. } => UploadFailure {
            file_name,
            message: message.clone(),
            kind: FailureKind::Transfer,
        },
        other => UploadFailure {
            file_name,
            message: other.to_string(),
            kind: FailureKind::Unknown,
        },
    }
}

fn report_outcome(ctx: &mut UpdateContext<'_>, outcome: &BatchOutcome) {
    let uploaded = outcome.uploaded();
    let failures = outcome.failures();
    tracing::info!(uploaded, failed = failures.len(), "upload batch finished");

    if uploaded > 0 {
        ctx.notifications.push(
            Notification::success("notification-upload-success")
                .arg("count", uploaded.to_string()),
        );
    }

    if failures.is_empty() {
        return;
    }
    let details = failures
        .iter()
        .map(|failure| {
            tracing::debug!(file = %failure.file_name, kind = ?failure.kind, "failure reported");
            format!("{}: {}", failure.file_name, failure.message)
        })
        .collect::<Vec<_>>()
        .join("\n");
    ctx.notifications.push(
        Notification::error("notification-upload-failed")
            .arg("count", failures.len().to_string())
            .arg("details", details),
    );
}

/// Warning listing every refused file of a batch, one line per file.
pub fn validation_notification(i18n: &I18n, error: UploadError) -> Notification {
    let key = error.i18n_key();
    let rejections: &[Rejection] = match &error {
        UploadError::Validation(rejections) => rejections,
        _ => &[],
    };
    let details = rejections
        .iter()
        .map(|rejection| format!("{}: {}", rejection.file_name, rejection_text(i18n, rejection)))
        .collect::<Vec<_>>()
        .join("\n");

    let notification = Notification::warning(key)
        .arg("count", rejections.len().to_string())
        .arg("details", details);
    if rejections.len() > 2 {
        notification.linger(Duration::from_secs(config::TOAST_LONG_SECS * 2))
    } else {
        notification
    }
}

/// Localized reason for one refused file.
pub fn rejection_text(i18n: &I18n, rejection: &Rejection) -> String {
    use crate::domain::upload::record::format_size;
    use crate::domain::upload::RejectionReason;

    match &rejection.reason {
        RejectionReason::UnsupportedType { mime_type } => i18n.tr_with_args(
            rejection.reason.i18n_key(),
            &[("type", mime_type.as_str())],
        ),
        RejectionReason::TooLarge {
            size_bytes,
            limit_bytes,
        } => {
            let size = format_size(*size_bytes);
            let limit = format_size(*limit_bytes);
            i18n.tr_with_args(
                rejection.reason.i18n_key(),
                &[("size", size.as_str()), ("limit", limit.as_str())],
            )
        }
    }
}

// =============================================================================
// Assets (thumbnails, preview, download, link)
// =============================================================================

fn fetch_image(
    ctx: &UpdateContext<'_>,
    record_id: RecordId,
    url: String,
    on_done: fn(RecordId, Result<Vec<u8>, AssetError>) -> Message,
) -> Task<Message> {
    let Some(client) = ctx.client.as_ref() else {
        return Task::none();
    };
    let http = client.http().clone();
    Task::perform(assets::fetch_bytes(http, url), move |result| {
        on_done(record_id.clone(), result)
    })
}

/// Caches a fetched thumbnail unless its record was deleted meanwhile.
pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    record_id: RecordId,
    result: Result<Vec<u8>, AssetError>,
) -> Task<Message> {
    match result {
        Ok(bytes) if ctx.registry.contains(&record_id) => {
            ctx.images.put(record_id, image::Handle::from_bytes(bytes));
        }
        Ok(_) => {}
        Err(error) => tracing::warn!(id = %record_id, %error, "thumbnail fetch failed"),
    }
    Task::none()
}

/// Opens the preview overlay for a record.
pub fn handle_open_preview(ctx: &mut UpdateContext<'_>, record_id: RecordId) -> Task<Message> {
    let Some(record) = ctx.registry.get(&record_id) else {
        return Task::none();
    };
    let cached = ctx.images.get(&record_id).cloned();
    let (state, fetch) = preview::State::open(record, cached);
    *ctx.preview = Some(state);

    match fetch {
        Some(url) => fetch_image(ctx, record_id, url, Message::PreviewLoaded),
        None => Task::none(),
    }
}

/// Shows a fetched raster, or the download fallback when the fetch failed.
pub fn handle_preview_loaded(
    ctx: &mut UpdateContext<'_>,
    record_id: RecordId,
    result: Result<Vec<u8>, AssetError>,
) -> Task<Message> {
    let handle = match result {
        Ok(bytes) => {
            let handle = image::Handle::from_bytes(bytes);
            if ctx.registry.contains(&record_id) {
                ctx.images.put(record_id.clone(), handle.clone());
            }
            Some(handle)
        }
        Err(error) => {
            tracing::warn!(id = %record_id, %error, "preview fetch failed");
            None
        }
    };

    if let Some(state) = ctx.preview.as_mut() {
        state.apply_fetch(&record_id, handle);
    }
    Task::none()
}

/// Asks where to save a record.
pub fn handle_download_request(ctx: &mut UpdateContext<'_>, record_id: RecordId) -> Task<Message> {
    let Some(record) = ctx.registry.get(&record_id) else {
        return Task::none();
    };

    let title = ctx.i18n.tr("download-dialog-title");
    let file_name = record.original_name.clone();
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .set_file_name(file_name)
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::DownloadTarget {
            record_id: record_id.clone(),
            path,
        },
    )
}

/// Streams the record to the chosen path; a cancelled dialog does nothing.
pub fn handle_download_target(
    ctx: &mut UpdateContext<'_>,
    record_id: &RecordId,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let (Some(record), Some(client)) = (ctx.registry.get(record_id), ctx.client.as_ref()) else {
        return Task::none();
    };

    tracing::info!(id = %record_id, destination = %path.display(), "download started");
    Task::perform(
        assets::download_to(client.http().clone(), record.url.clone(), path),
        Message::DownloadFinished,
    )
}

pub fn handle_download_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<(PathBuf, u64), AssetError>,
) -> Task<Message> {
    match result {
        Ok((path, bytes)) => {
            tracing::info!(destination = %path.display(), bytes, "download complete");
            let file = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            ctx.notifications.push(
                Notification::success("notification-download-success").arg("file", file),
            );
        }
        Err(error) => {
            tracing::warn!(%error, "download failed");
            ctx.notifications.push(
                Notification::error("notification-download-error")
                    .arg("details", error.to_string()),
            );
        }
    }
    Task::none()
}

/// Copies the record's URL to the clipboard.
pub fn handle_copy_link(ctx: &mut UpdateContext<'_>, record_id: &RecordId) -> Task<Message> {
    let Some(url) = ctx.registry.get(record_id).map(|record| record.url.clone()) else {
        return Task::none();
    };
    ctx.notifications
        .push(Notification::info("notification-link-copied"));
    iced::clipboard::write(url)
}
