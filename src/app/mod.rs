// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the upload pipeline and
//! the gallery views.
//!
//! The `App` struct wires together the domains (registry, batch tracker,
//! localization, settings) and translates messages into side effects like
//! uploads, asset fetches or config persistence. Policy decisions (batch
//! queueing, what a delete touches, which preference is persisted) stay
//! close to the main update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::domain::upload::{Category, FileRegistry, RecordId, UploadTracker};
use crate::error::UploadError;
use crate::i18n::fluent::I18n;
use crate::ui::confirm::PendingDeletion;
use crate::ui::gallery::ViewMode;
use crate::ui::notifications;
use crate::ui::preview;
use crate::ui::theming::ThemeMode;
use crate::upload::UploadClient;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use lru::LruCache;
use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// the upload pipeline.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Upload values from the command line, kept for configuration retries.
    overrides: config::UploadOverrides,
    /// Present once cloud name and upload preset are known.
    client: Option<UploadClient>,
    /// Why uploads are disabled, shown on the error screen.
    config_error: Option<UploadError>,
    config_details_visible: bool,
    /// Files from the command line, uploaded once configuration is valid.
    startup_files: Vec<PathBuf>,
    registry: FileRegistry,
    tracker: UploadTracker,
    /// Metadata of a batch is being read; the batch has not started yet.
    inspecting: bool,
    /// Drops and picks made while a batch was in flight, oldest first.
    pending_batches: VecDeque<Vec<PathBuf>>,
    /// Paths of a drop that has not settled yet.
    dropped: Vec<PathBuf>,
    hovering: bool,
    category: Category,
    /// Session-only; never persisted.
    view_mode: ViewMode,
    preview: Option<preview::State>,
    pending_deletion: Option<PendingDeletion>,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Decoded thumbnails and preview rasters by record.
    images: LruCache<RecordId, image::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("records", &self.registry.len())
            .field("uploading", &self.tracker.is_uploading())
            .field("queued_batches", &self.pending_batches.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 560;

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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
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

impl Default for App {
    fn default() -> Self {
        let capacity =
            NonZeroUsize::new(config::THUMBNAIL_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            i18n: I18n::default(),
            screen: Screen::Gallery,
            overrides: config::UploadOverrides::default(),
            client: None,
            config_error: None,
            config_details_visible: false,
            startup_files: Vec::new(),
            registry: FileRegistry::new(),
            tracker: UploadTracker::new(),
            inspecting: false,
            pending_batches: VecDeque::new(),
            dropped: Vec::new(),
            hovering: false,
            category: Category::default(),
            view_mode: ViewMode::default(),
            preview: None,
            pending_deletion: None,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
            images: LruCache::new(capacity),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the
    /// launcher. Uploads files given on the command line when the
    /// configuration is complete.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (cfg, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &cfg);

        let mut app = App {
            i18n,
            theme_mode: cfg.general.theme_mode,
            overrides: config::UploadOverrides {
                cloud_name: flags.cloud_name,
                upload_preset: flags.upload_preset,
                folder: flags.folder,
            },
            startup_files: flags.files,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let settings = config::resolve_upload_settings(&cfg.upload, &app.overrides);
        let task = {
            let mut ctx = app.update_context();
            if update::apply_upload_settings(&mut ctx, &settings) {
                update::upload_startup_files(&mut ctx)
            } else {
                Task::none()
            }
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            overrides: &self.overrides,
            client: &mut self.client,
            config_error: &mut self.config_error,
            config_details_visible: &mut self.config_details_visible,
            startup_files: &mut self.startup_files,
            registry: &mut self.registry,
            tracker: &mut self.tracker,
            inspecting: &mut self.inspecting,
            pending_batches: &mut self.pending_batches,
            dropped: &mut self.dropped,
            hovering: &mut self.hovering,
            category: &mut self.category,
            view_mode: &mut self.view_mode,
            preview: &mut self.preview,
            pending_deletion: &mut self.pending_deletion,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
            images: &mut self.images,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");

        match self.tracker.current() {
            Some(batch) => {
                let percent = batch.percent().to_string();
                self.i18n.tr_with_args(
                    "window-title-uploading",
                    &[("app", app_name.as_str()), ("percent", percent.as_str())],
                )
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(!self.notifications.is_empty());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::UploadZone(zone_message) => {
                update::handle_upload_zone_message(&mut ctx, zone_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Preview(preview_message) => {
                update::handle_preview_message(&mut ctx, preview_message)
            }
            Message::Confirm(confirm_message) => {
                update::handle_confirm_message(&mut ctx, confirm_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.update(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.expire(now);
                Task::none()
            }
            Message::FilesHovered => {
                *ctx.hovering = ctx.client.is_some();
                Task::none()
            }
            Message::FilesHoverLeft => {
                *ctx.hovering = false;
                Task::none()
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::DropSettled => update::handle_drop_settled(&mut ctx),
            Message::FilesPicked(paths) => update::handle_files_picked(&mut ctx, paths),
            Message::Inspected(inspection) => update::handle_inspected(&mut ctx, inspection),
            Message::UploadFinished {
                batch,
                file_name,
                result,
            } => update::handle_upload_finished(&mut ctx, batch, file_name, result),
            Message::ThumbnailLoaded(record_id, result) => {
                update::handle_thumbnail_loaded(&mut ctx, record_id, result)
            }
            Message::PreviewLoaded(record_id, result) => {
                update::handle_preview_loaded(&mut ctx, record_id, result)
            }
            Message::DownloadTarget { record_id, path } => {
                update::handle_download_target(&mut ctx, &record_id, path)
            }
            Message::DownloadFinished(result) => update::handle_download_finished(&mut ctx, result),
            Message::RetryConfiguration => update::handle_retry_configuration(&mut ctx),
            Message::ToggleConfigDetails => {
                *ctx.config_details_visible = !*ctx.config_details_visible;
                Task::none()
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            registry: &self.registry,
            category: self.category,
            view_mode: self.view_mode,
            images: &self.images,
            hovering: self.hovering,
            can_upload: self.client.is_some(),
            is_dark_theme: self.theme_mode.is_dark(),
            batch: self.tracker.current(),
            preview: self.preview.as_ref(),
            pending_deletion: self.pending_deletion.as_ref(),
            notifications: &self.notifications,
            config_error: self.config_error.as_ref(),
            config_details_visible: self.config_details_visible,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::upload::{BatchId, FileKind, FileRecord};
    use crate::ui::notifications::{Notification, Severity};
    use crate::ui::{confirm, gallery, navbar};
    use crate::upload::{Inspection, UploadCandidate};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const UPLOAD_ENV: [&str; 4] = [
        config::ENV_CLOUD_NAME,
        config::ENV_UPLOAD_PRESET,
        config::ENV_UPLOAD_FOLDER,
        config::ENV_API_BASE_URL,
    ];

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = paths::env_lock();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous_dir = std::env::var(paths::ENV_CONFIG_DIR).ok();
        let previous_upload: Vec<_> = UPLOAD_ENV
            .iter()
            .map(|key| (*key, std::env::var(key).ok()))
            .collect();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());
        for key in UPLOAD_ENV {
            std::env::remove_var(key);
        }

        test(temp_dir.path());

        match previous_dir {
            Some(value) => std::env::set_var(paths::ENV_CONFIG_DIR, value),
            None => std::env::remove_var(paths::ENV_CONFIG_DIR),
        }
        for (key, value) in previous_upload {
            if let Some(value) = value {
                std::env::set_var(key, value);
            }
        }
    }

    fn flags() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        }
    }

    fn configured_flags() -> Flags {
        Flags {
            cloud_name: Some("demo".to_string()),
            upload_preset: Some("unsigned".to_string()),
            ..flags()
        }
    }

    fn configured_app() -> App {
        let mut app = None;
        with_temp_config_dir(|_| app = Some(App::new(configured_flags()).0));
        app.expect("app was built")
    }

    fn record(id: &str, kind: FileKind) -> FileRecord {
        FileRecord::new(
            RecordId::new(format!("file-uploads/{id}")),
            id,
            format!("https://res.example.com/{id}"),
            kind,
            1_024,
        )
    }

    fn candidates(names: &[&str]) -> Inspection {
        Inspection {
            candidates: names
                .iter()
                .map(|name| UploadCandidate::new(Path::new("/tmp").join(name), 1_024))
                .collect(),
            unreadable: Vec::new(),
        }
    }

    fn current_batch(app: &App) -> BatchId {
        app.tracker.current().expect("batch in flight").id()
    }

    fn finish(app: &mut App, batch: BatchId, name: &str, result: Result<FileRecord, UploadError>) {
        let _ = app.update(Message::UploadFinished {
            batch,
            file_name: name.to_string(),
            result,
        });
    }

    fn transfer_error(name: &str, message: &str) -> UploadError {
        UploadError::Transfer {
            file_name: name.to_string(),
            message: message.to_string(),
        }
    }

    fn find_notification<'a>(app: &'a App, key: &str) -> Option<&'a Notification> {
        app.notifications
            .visible()
            .find(|notification| notification.key() == key)
    }

    #[test]
    fn missing_configuration_shows_error_screen() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(flags());

            assert_eq!(app.screen, Screen::ConfigurationError);
            assert!(app.client.is_none());
            match &app.config_error {
                Some(UploadError::Configuration { missing }) => {
                    assert_eq!(missing, &["cloud_name", "upload_preset"]);
                }
                other => panic!("expected configuration error, got {other:?}"),
            }
        });
    }

    #[test]
    fn retry_picks_up_settings_file() {
        with_temp_config_dir(|dir| {
            let (mut app, _task) = App::new(flags());
            assert_eq!(app.screen, Screen::ConfigurationError);

            fs::write(
                dir.join("settings.toml"),
                "[upload]\ncloud_name = \"demo\"\nupload_preset = \"unsigned\"\n",
            )
            .expect("write settings");
            let _ = app.update(Message::RetryConfiguration);

            assert_eq!(app.screen, Screen::Gallery);
            assert!(app.client.is_some());
            assert!(app.config_error.is_none());
        });
    }

    #[test]
    fn retry_without_changes_stays_on_error_screen() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(flags());
            let _ = app.update(Message::RetryConfiguration);
            assert_eq!(app.screen, Screen::ConfigurationError);
        });
    }

    #[test]
    fn malformed_settings_file_warns_and_uses_defaults() {
        with_temp_config_dir(|dir| {
            fs::write(dir.join("settings.toml"), "not = [valid").expect("write settings");
            let (app, _task) = App::new(configured_flags());

            assert!(find_notification(&app, "notification-config-load-error").is_some());
            assert_eq!(app.screen, Screen::Gallery);
        });
    }

    #[test]
    fn successful_batch_appends_every_record_and_resets_progress() {
        let mut app = configured_app();
        let _ = app.update(Message::Inspected(candidates(&["a.png", "b.pdf", "c.jpg"])));
        assert!(app.tracker.is_uploading());
        assert_eq!(app.tracker.percent(), 0);
        let batch = current_batch(&app);

        finish(&mut app, batch, "a.png", Ok(record("a", FileKind::Image)));
        assert_eq!(app.tracker.percent(), 33);
        assert!(app.title().contains("33%"));
        finish(&mut app, batch, "b.pdf", Ok(record("b", FileKind::Document)));
        finish(&mut app, batch, "c.jpg", Ok(record("c", FileKind::Image)));

        assert_eq!(app.registry.len(), 3);
        assert!(!app.tracker.is_uploading());
        assert_eq!(app.tracker.percent(), 0);
        let success = find_notification(&app, "notification-upload-success").expect("toast");
        assert_eq!(success.arg_value("count"), Some("3"));
        assert_eq!(app.title(), "Cloudlift");
    }

    #[test]
    fn partial_failure_names_each_failed_file_once() {
        let mut app = configured_app();
        let _ = app.update(Message::Inspected(candidates(&["ok.png", "bad1.png", "bad2.pdf"])));
        let batch = current_batch(&app);

        finish(&mut app, batch, "bad1.png", Err(transfer_error("bad1.png", "Invalid image file")));
        finish(&mut app, batch, "ok.png", Ok(record("ok", FileKind::Image)));
        finish(&mut app, batch, "bad2.pdf", Err(transfer_error("bad2.pdf", "Upload preset not found")));

        assert_eq!(app.registry.len(), 1);
        assert!(!app.tracker.is_uploading());

        let failed: Vec<_> = app
            .notifications
            .visible()
            .filter(|n| n.key() == "notification-upload-failed")
            .collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].severity(), Severity::Error);
        let details = failed[0].arg_value("details").expect("details");
        assert!(details.contains("bad1.png: Invalid image file"));
        assert!(details.contains("bad2.pdf: Upload preset not found"));
        assert!(!details.contains("ok.png"));
    }

    #[test]
    fn total_failure_leaves_registry_untouched() {
        let mut app = configured_app();
        let _ = app.update(Message::Inspected(candidates(&["a.png"])));
        let batch = current_batch(&app);

        finish(&mut app, batch, "a.png", Err(UploadError::Unknown("a.png: gone".to_string())));

        assert!(app.registry.is_empty());
        assert!(!app.tracker.is_uploading());
        assert!(find_notification(&app, "notification-upload-success").is_none());
        let failed = find_notification(&app, "notification-upload-failed").expect("toast");
        assert_eq!(failed.arg_value("details"), Some("a.png: a.png: gone"));
    }

    #[test]
    fn mixed_failures_share_one_error_toast() {
        let mut app = configured_app();
        let _ = app.update(Message::Inspected(candidates(&[
            "ok.png",
            "bad.png",
            "lost1.png",
            "lost2.pdf",
        ])));
        let batch = current_batch(&app);

        finish(&mut app, batch, "ok.png", Ok(record("ok", FileKind::Image)));
        finish(&mut app, batch, "bad.png", Err(transfer_error("bad.png", "Invalid image file")));
        finish(&mut app, batch, "lost1.png", Err(UploadError::Unknown("disk read failed".to_string())));
        finish(&mut app, batch, "lost2.pdf", Err(UploadError::Unknown("task aborted".to_string())));

        let errors: Vec<_> = app
            .notifications
            .visible()
            .filter(|n| n.severity() == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key(), "notification-upload-failed");
        assert_eq!(errors[0].arg_value("count"), Some("3"));
        let details = errors[0].arg_value("details").expect("details");
        assert!(details.contains("bad.png: Invalid image file"));
        assert!(details.contains("lost1.png: disk read failed"));
        assert!(details.contains("lost2.pdf: task aborted"));
        assert_eq!(app.notifications.visible().count(), 2);
        assert_eq!(app.registry.len(), 1);
    }

    #[test]
    fn rejected_file_is_named_and_never_sent() {
        let mut app = configured_app();
        let _ = app.update(Message::Inspected(candidates(&["malware.exe"])));

        assert!(!app.tracker.is_uploading());
        let warning = find_notification(&app, "error-upload-validation").expect("toast");
        assert_eq!(warning.severity(), Severity::Warning);
        let details = warning.arg_value("details").expect("details");
        assert!(details.contains("malware.exe"));
        assert!(details.contains("application/octet-stream"));
    }

    #[test]
    fn accepted_siblings_of_rejected_file_are_sent() {
        let mut app = configured_app();
        let _ = app.update(Message::Inspected(candidates(&["malware.exe", "photo.png"])));

        let batch = app.tracker.current().expect("batch in flight");
        assert_eq!(batch.total(), 1);
        assert!(find_notification(&app, "error-upload-validation").is_some());
    }

    #[test]
    fn unreadable_path_raises_unknown_error() {
        let mut app = configured_app();
        let _ = app.update(Message::Inspected(Inspection {
            candidates: Vec::new(),
            unreadable: vec![crate::upload::candidate::Unreadable {
                file_name: "ghost.png".to_string(),
                message: "No such file".to_string(),
            }],
        }));

        let error = find_notification(&app, "error-upload-unknown").expect("toast");
        assert_eq!(error.arg_value("details"), Some("ghost.png: No such file"));
        assert!(!app.tracker.is_uploading());
    }

    #[test]
    fn unreadable_paths_are_listed_in_one_toast() {
        use crate::upload::candidate::Unreadable;

        let mut app = configured_app();
        let _ = app.update(Message::Inspected(Inspection {
            candidates: Vec::new(),
            unreadable: vec![
                Unreadable {
                    file_name: "ghost.png".to_string(),
                    message: "No such file".to_string(),
                },
                Unreadable {
                    file_name: "locked.pdf".to_string(),
                    message: "Permission denied".to_string(),
                },
            ],
        }));

        let errors: Vec<_> = app
            .notifications
            .visible()
            .filter(|n| n.key() == "error-upload-unknown")
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].arg_value("details"),
            Some("ghost.png: No such file\nlocked.pdf: Permission denied")
        );
    }

    #[test]
    fn selection_during_upload_is_queued_as_next_batch() {
        let mut app = configured_app();
        let _ = app.update(Message::Inspected(candidates(&["a.png"])));
        let batch = current_batch(&app);

        let _ = app.update(Message::FilesPicked(Some(vec![PathBuf::from("/tmp/b.png")])));
        assert_eq!(app.pending_batches.len(), 1);
        assert_eq!(app.tracker.current().map(|b| b.total()), Some(1));

        finish(&mut app, batch, "a.png", Ok(record("a", FileKind::Image)));
        assert!(app.pending_batches.is_empty());
        assert!(app.inspecting);
    }

    #[tokio::test]
    async fn dropped_files_settle_into_one_batch() {
        let mut app = configured_app();
        let _ = app.update(Message::FilesHovered);
        assert!(app.hovering);

        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/a.png")));
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/b.png")));
        assert!(!app.hovering);
        assert_eq!(app.dropped.len(), 2);

        let _ = app.update(Message::DropSettled);
        assert!(app.dropped.is_empty());
        assert!(app.inspecting);
    }

    #[test]
    fn cancelled_picker_does_nothing() {
        let mut app = configured_app();
        let _ = app.update(Message::FilesPicked(None));
        assert!(!app.inspecting);
        assert!(app.pending_batches.is_empty());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = configured_app();
        app.registry
            .append([record("a", FileKind::Image), record("b", FileKind::Other)]);
        let id = RecordId::new("file-uploads/a");

        let _ = app.update(Message::Gallery(gallery::Message::Delete(id.clone())));
        assert_eq!(
            app.pending_deletion.as_ref().map(|p| p.file_name.as_str()),
            Some("a")
        );
        assert_eq!(app.registry.len(), 2);

        let _ = app.update(Message::Confirm(confirm::Message::Cancel));
        assert!(app.pending_deletion.is_none());
        assert_eq!(app.registry.len(), 2);

        let _ = app.update(Message::Gallery(gallery::Message::Delete(id.clone())));
        let _ = app.update(Message::Confirm(confirm::Message::Confirm));
        assert!(app.pending_deletion.is_none());
        assert!(!app.registry.contains(&id));
        assert_eq!(app.registry.len(), 1);
    }

    #[test]
    fn escape_closes_preview_without_touching_registry() {
        let mut app = configured_app();
        app.registry.append([record("a", FileKind::Image)]);
        let id = RecordId::new("file-uploads/a");

        let _ = app.update(Message::Gallery(gallery::Message::Preview(id.clone())));
        assert_eq!(app.preview.as_ref().map(|p| p.record_id()), Some(&id));

        let _ = app.update(Message::EscapePressed);
        assert!(app.preview.is_none());
        assert_eq!(app.registry.len(), 1);
    }

    #[test]
    fn failed_pdf_preview_falls_back_to_download() {
        let mut app = configured_app();
        let mut doc = record("report", FileKind::Document);
        doc.url = "https://res.example.com/report.pdf".to_string();
        let id = doc.id.clone();
        app.registry.append([doc]);

        let _ = app.update(Message::Gallery(gallery::Message::Preview(id.clone())));
        let _ = app.update(Message::PreviewLoaded(
            id,
            Err(crate::upload::assets::AssetError::Status("404 Not Found".to_string())),
        ));

        let state = app.preview.as_ref().expect("preview open");
        assert!(matches!(state.content(), preview::Content::Unavailable));
    }

    #[test]
    fn thumbnail_of_deleted_record_is_dropped() {
        let mut app = configured_app();
        let _ = app.update(Message::ThumbnailLoaded(
            RecordId::new("file-uploads/gone"),
            Ok(vec![0_u8; 4]),
        ));
        assert!(app.images.is_empty());
    }

    #[test]
    fn theme_toggle_flips_mode() {
        let mut app = configured_app();
        app.theme_mode = ThemeMode::Dark;

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.theme(), Theme::Light);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn view_mode_toggle_is_session_only() {
        let mut app = configured_app();
        let _ = app.update(Message::Navbar(navbar::Message::SetViewMode(ViewMode::List)));
        assert_eq!(app.view_mode, ViewMode::List);
    }

    #[test]
    fn category_counts_follow_registry() {
        let mut app = configured_app();
        app.registry.append([
            record("a", FileKind::Image),
            record("b", FileKind::Document),
            record("c", FileKind::Image),
        ]);
        let _ = app.update(Message::Gallery(gallery::Message::SelectCategory(
            Category::Images,
        )));

        assert_eq!(app.category, Category::Images);
        let counts = app.registry.counts();
        for category in Category::ALL {
            assert_eq!(counts.get(category), app.registry.filter(category).len());
        }
    }
}
