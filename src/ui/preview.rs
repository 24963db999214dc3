// SPDX-License-Identifier: MPL-2.0
//! Full-size preview of a single record.
//!
//! Images show the uploaded file itself. PDFs show a raster of their first
//! page produced by the hosting service; when that conversion cannot be
//! fetched, and for every other kind, a fallback panel offers a download.
//! Closing the preview never touches the registry.

use crate::domain::upload::{FileKind, FileRecord, RecordId};
use crate::i18n::fluent::I18n;
use crate::ui::action_icons;
use crate::ui::components::notice::{Notice, Tone};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::upload::assets::pdf_preview_url;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, ContentFit, Element, Length};

/// What the preview currently shows.
#[derive(Debug, Clone)]
pub enum Content {
    /// Waiting for the raster to arrive.
    Loading,
    Ready(Handle),
    /// Nothing renderable; only a download is offered.
    Unavailable,
}

/// Open preview.
#[derive(Debug, Clone)]
pub struct State {
    record_id: RecordId,
    content: Content,
}

impl State {
    /// Opens a preview for `record`.
    ///
    /// `cached` is a raster already held in memory for this record. Returns
    /// the URL to fetch when the preview still needs one.
    #[must_use]
    pub fn open(record: &FileRecord, cached: Option<Handle>) -> (Self, Option<String>) {
        let source = raster_source(record);
        let (content, fetch) = match (cached, source) {
            (Some(handle), Some(_)) => (Content::Ready(handle), None),
            (None, Some(url)) => (Content::Loading, Some(url)),
            (_, None) => (Content::Unavailable, None),
        };
        (
            Self {
                record_id: record.id.clone(),
                content,
            },
            fetch,
        )
    }

    #[must_use]
    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Applies a finished fetch. Results for another record are ignored.
    ///
    /// Returns `true` if the result was applied.
    pub fn apply_fetch(&mut self, record_id: &RecordId, handle: Option<Handle>) -> bool {
        if &self.record_id != record_id || !matches!(self.content, Content::Loading) {
            return false;
        }
        self.content = match handle {
            Some(handle) => Content::Ready(handle),
            None => Content::Unavailable,
        };
        true
    }
}

/// URL of a raster rendering of `record`, if the service can provide one.
#[must_use]
pub fn raster_source(record: &FileRecord) -> Option<String> {
    match record.kind {
        FileKind::Image => Some(record.url.clone()),
        FileKind::Document => pdf_preview_url(&record.url),
        FileKind::Other => None,
    }
}

/// Messages emitted by the preview.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Download(RecordId),
}

/// Contextual data needed to render the preview.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub record: &'a FileRecord,
}

/// Render the preview panel; the caller places it in a modal layer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let download = Message::Download(ctx.record.id.clone());

    let close_button = button(icons::sized(
        icons::tinted(action_icons::notification::close(), palette::WHITE),
        sizing::ICON_MD,
    ))
    .on_press(Message::Close)
    .padding(spacing::XS)
    .style(styles::button::overlay(palette::WHITE, 0.0, 0.5));

    let download_button = button(icons::sized(
        icons::tinted(action_icons::gallery::download(), palette::WHITE),
        sizing::ICON_MD,
    ))
    .on_press(download.clone())
    .padding(spacing::XS)
    .style(styles::button::overlay(palette::WHITE, 0.0, 0.5));

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.record.original_name.as_str()).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(Element::from(download_button))
        .push(Element::from(close_button));

    let body: Element<'a, Message> = match ctx.state.content() {
        Content::Loading => Container::new(Text::new(ctx.i18n.tr("preview-loading")))
            .center(Length::Fill)
            .into(),
        Content::Ready(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Content::Unavailable => Container::new(
            Notice::new(Tone::Info)
                .title(ctx.i18n.tr("preview-unavailable-title"))
                .body(ctx.i18n.tr("preview-unavailable-message"))
                .action(ctx.i18n.tr("action-download"), download)
                .view(),
        )
        .center(Length::Fill)
        .into(),
    };

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(spacing::MD)
    .style(styles::overlay::preview_frame)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: FileKind, url: &str) -> FileRecord {
        FileRecord::new(RecordId::new("r1"), "file", url, kind, 10)
    }

    fn pixel() -> Handle {
        Handle::from_rgba(1, 1, vec![255_u8; 4])
    }

    #[test]
    fn image_without_cache_is_fetched_from_its_url() {
        let (state, fetch) = State::open(&record(FileKind::Image, "https://x/a.png"), None);
        assert!(matches!(state.content(), Content::Loading));
        assert_eq!(fetch.as_deref(), Some("https://x/a.png"));
    }

    #[test]
    fn cached_raster_is_shown_immediately() {
        let (state, fetch) =
            State::open(&record(FileKind::Image, "https://x/a.png"), Some(pixel()));
        assert!(matches!(state.content(), Content::Ready(_)));
        assert!(fetch.is_none());
    }

    #[test]
    fn pdf_is_fetched_as_first_page_raster() {
        let (_, fetch) = State::open(&record(FileKind::Document, "https://x/doc.pdf"), None);
        assert_eq!(fetch.as_deref(), Some("https://x/doc.jpg"));
    }

    #[test]
    fn other_kinds_fall_back_to_download() {
        let (state, fetch) = State::open(&record(FileKind::Other, "https://x/a.zip"), None);
        assert!(matches!(state.content(), Content::Unavailable));
        assert!(fetch.is_none());
    }

    #[test]
    fn failed_fetch_shows_fallback() {
        let doc = record(FileKind::Document, "https://x/doc.pdf");
        let (mut state, _) = State::open(&doc, None);

        assert!(state.apply_fetch(&doc.id, None));
        assert!(matches!(state.content(), Content::Unavailable));
    }

    #[test]
    fn fetch_for_another_record_is_ignored() {
        let (mut state, _) = State::open(&record(FileKind::Image, "https://x/a.png"), None);

        assert!(!state.apply_fetch(&RecordId::new("other"), Some(pixel())));
        assert!(matches!(state.content(), Content::Loading));
    }
}
