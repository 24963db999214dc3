// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! and stacks the progress pill, the modal layers and the toasts on top.

use super::{config, Message, Screen};
use crate::domain::upload::{Category, FileRegistry, RecordId, UploadBatch};
use crate::error::UploadError;
use crate::i18n::fluent::I18n;
use crate::ui::components::notice::{DetailsLabels, Notice, Tone};
use crate::ui::components::modal::modal;
use crate::ui::confirm::{self, PendingDeletion};
use crate::ui::design_tokens::spacing;
use crate::ui::gallery::{self, ViewMode};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::preview;
use crate::ui::progress;
use crate::ui::upload_zone;
use iced::widget::{image, Column, Container, Stack};
use iced::{alignment, Element, Length};
use lru::LruCache;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub registry: &'a FileRegistry,
    pub category: Category,
    pub view_mode: ViewMode,
    pub images: &'a LruCache<RecordId, image::Handle>,
    pub hovering: bool,
    pub can_upload: bool,
    pub is_dark_theme: bool,
    pub batch: Option<&'a UploadBatch>,
    pub preview: Option<&'a preview::State>,
    pub pending_deletion: Option<&'a PendingDeletion>,
    pub notifications: &'a Manager,
    pub config_error: Option<&'a UploadError>,
    pub config_details_visible: bool,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        view_mode: ctx.view_mode,
        is_dark_theme: ctx.is_dark_theme,
        can_upload: ctx.can_upload,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => view_gallery(&ctx),
        Screen::ConfigurationError => view_configuration_error(&ctx),
    };

    let page = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut base = Stack::new().push(page);
    if let Some(batch) = ctx.batch {
        base = base.push(
            Container::new(progress::view(ctx.i18n, batch))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::LG),
        );
    }

    let with_modal = match (preview_layer(&ctx), ctx.pending_deletion) {
        (Some(content), _) => modal(base, content, Message::Preview(preview::Message::Close)),
        (None, Some(pending)) => modal(
            base,
            confirm::view(ctx.i18n, pending).map(Message::Confirm),
            Message::Confirm(confirm::Message::Cancel),
        ),
        (None, None) => base.into(),
    };

    Stack::new()
        .push(with_modal)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let zone = upload_zone::view(upload_zone::ViewContext {
        i18n: ctx.i18n,
        hovering: ctx.hovering,
        can_upload: ctx.can_upload,
    })
    .map(Message::UploadZone);

    let gallery_view = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        registry: ctx.registry,
        category: ctx.category,
        view_mode: ctx.view_mode,
        thumbnails: ctx.images,
    })
    .map(Message::Gallery);

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(zone)
        .push(gallery_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_configuration_error<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let missing = match ctx.config_error {
        Some(UploadError::Configuration { missing }) => missing.join(", "),
        _ => String::new(),
    };

    let mut details = ctx
        .config_error
        .map(ToString::to_string)
        .unwrap_or_default();
    if let Some(path) = config::settings_path() {
        let path = path.display().to_string();
        details.push('\n');
        details.push_str(
            &ctx.i18n
                .tr_with_args("config-error-settings-file", &[("path", path.as_str())]),
        );
    }

    Notice::new(Tone::Error)
        .title(ctx.i18n.tr("config-error-title"))
        .body(
            ctx.i18n
                .tr_with_args("config-error-message", &[("missing", missing.as_str())]),
        )
        .details(
            details,
            DetailsLabels {
                show: ctx.i18n.tr("config-error-show-details"),
                hide: ctx.i18n.tr("config-error-hide-details"),
                heading: ctx.i18n.tr("config-error-details-heading"),
            },
            ctx.config_details_visible,
            Message::ToggleConfigDetails,
        )
        .action(ctx.i18n.tr("config-error-retry"), Message::RetryConfiguration)
        .centered()
}

/// The preview panel, when a preview is open on a record still present.
fn preview_layer<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let state = ctx.preview?;
    let record = ctx.registry.get(state.record_id())?;
    Some(
        preview::view(preview::ViewContext {
            i18n: ctx.i18n,
            state,
            record,
        })
        .map(Message::Preview),
    )
}
