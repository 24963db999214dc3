// SPDX-License-Identifier: MPL-2.0
//! Gallery of uploaded files.
//!
//! Projects the registry through the active [`Category`] and renders the
//! result as a responsive grid or a list, with category buttons on top and
//! per-card actions (download, preview, copy link, delete).

use crate::app::config::{GRID_CARD_WIDTH, GRID_THUMBNAIL_HEIGHT, LIST_THUMBNAIL_SIZE};
use crate::domain::upload::record::format_size;
use crate::domain::upload::{Category, FileKind, FileRecord, FileRegistry, RecordId};
use crate::i18n::fluent::I18n;
use crate::ui::action_icons;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{button, responsive, scrollable, Column, Container, Row, Space, Svg, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Size,
};
use lru::LruCache;

/// Maximum characters of a file name shown on a card.
const MAX_CARD_NAME_LEN: usize = 28;

/// Gallery layout. Session-only preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Contextual data needed to render the gallery.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub registry: &'a FileRegistry,
    pub category: Category,
    pub view_mode: ViewMode,
    pub thumbnails: &'a LruCache<RecordId, Handle>,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    SelectCategory(Category),
    Download(RecordId),
    Preview(RecordId),
    CopyLink(RecordId),
    Delete(RecordId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Download(RecordId),
    Preview(RecordId),
    CopyLink(RecordId),
    /// Deletion must be confirmed before the record is removed.
    RequestDelete(RecordId),
}

/// Process a gallery message and return the corresponding event.
pub fn update(message: Message, category: &mut Category) -> Event {
    match message {
        Message::SelectCategory(selected) => {
            *category = selected;
            Event::None
        }
        Message::Download(id) => Event::Download(id),
        Message::Preview(id) => Event::Preview(id),
        Message::CopyLink(id) => Event::CopyLink(id),
        Message::Delete(id) => Event::RequestDelete(id),
    }
}

/// Number of grid columns that fit in `width`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn columns_for_width(width: f32) -> usize {
    if !width.is_finite() || width <= GRID_CARD_WIDTH {
        return 1;
    }
    (((width + spacing::MD) / (GRID_CARD_WIDTH + spacing::MD)).floor() as usize).max(1)
}

/// Shortens long names, keeping the extension visible.
#[must_use]
pub fn truncate_name(name: &str) -> String {
    let count = name.chars().count();
    if count <= MAX_CARD_NAME_LEN {
        return name.to_string();
    }
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.chars().count() < MAX_CARD_NAME_LEN / 2);
    match extension {
        Some(ext) => {
            let keep = MAX_CARD_NAME_LEN - ext.chars().count() - 2;
            let head: String = name.chars().take(keep).collect();
            format!("{head}….{ext}")
        }
        None => {
            let head: String = name.chars().take(MAX_CARD_NAME_LEN - 1).collect();
            format!("{head}…")
        }
    }
}

/// Formats the service's RFC 3339 upload time in local time.
#[must_use]
pub fn format_uploaded_at(created_at: &str) -> Option<String> {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .ok()
        .map(|time| {
            time.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
}

/// Render the category bar and the records of the active category.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let records = ctx.registry.filter(ctx.category);

    let body: Element<'a, Message> = if ctx.registry.is_empty() {
        empty_message(ctx.i18n.tr("gallery-empty"))
    } else if records.is_empty() {
        empty_message(ctx.i18n.tr("gallery-empty-category"))
    } else {
        match ctx.view_mode {
            ViewMode::Grid => responsive(move |available: Size| grid(ctx, available)).into(),
            ViewMode::List => list(ctx, records),
        }
    };

    Column::new()
        .spacing(spacing::MD)
        .push(category_bar(ctx))
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn category_bar<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let counts = ctx.registry.counts();
    let buttons = Category::ALL.iter().map(|&category| {
        let count = counts.get(category).to_string();
        let label = ctx.i18n.tr(category.i18n_key());
        let text = ctx.i18n.tr_with_args(
            "category-with-count",
            &[("label", label.as_str()), ("count", count.as_str())],
        );
        button(Text::new(text).size(typography::BODY))
            .on_press(Message::SelectCategory(category))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::chip(category == ctx.category))
            .into()
    });

    Row::with_children(buttons).spacing(spacing::XS).into()
}

fn empty_message<'a>(text: String) -> Element<'a, Message> {
    Container::new(
        Text::new(text)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .into()
}

fn grid<'a>(ctx: ViewContext<'a>, available: Size) -> Element<'a, Message> {
    let columns = columns_for_width(available.width);
    let records = ctx.registry.filter(ctx.category);

    let rows = records.chunks(columns).map(|chunk| {
        Row::with_children(chunk.iter().map(|&record| grid_card(ctx, record)))
            .spacing(spacing::MD)
            .into()
    });

    scrollable(Column::with_children(rows).spacing(spacing::MD))
        .height(Length::Fill)
        .into()
}

fn list<'a>(ctx: ViewContext<'a>, records: Vec<&'a FileRecord>) -> Element<'a, Message> {
    let rows = records.into_iter().map(|record| list_row(ctx, record));

    scrollable(Column::with_children(rows).spacing(spacing::XS))
        .height(Length::Fill)
        .into()
}

fn grid_card<'a>(ctx: ViewContext<'a>, record: &'a FileRecord) -> Element<'a, Message> {
    let preview = Container::new(thumbnail(ctx, record, sizing::ICON_XXL))
        .width(Length::Fill)
        .height(Length::Fixed(GRID_THUMBNAIL_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::thumbnail);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(preview)
        .push(Text::new(truncate_name(&record.original_name)).size(typography::BODY))
        .push(metadata_line(record))
        .push(actions(record));

    Container::new(content)
        .width(Length::Fixed(GRID_CARD_WIDTH))
        .padding(spacing::XS)
        .style(styles::container::card)
        .into()
}

fn list_row<'a>(ctx: ViewContext<'a>, record: &'a FileRecord) -> Element<'a, Message> {
    let preview = Container::new(thumbnail(ctx, record, sizing::ICON_MD))
        .width(Length::Fixed(LIST_THUMBNAIL_SIZE))
        .height(Length::Fixed(LIST_THUMBNAIL_SIZE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::thumbnail);

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(record.original_name.as_str()).size(typography::BODY))
        .push(metadata_line(record));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(preview)
        .push(details)
        .push(actions(record));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::card)
        .into()
}

/// Cached thumbnail for images, a kind glyph otherwise.
fn thumbnail<'a>(
    ctx: ViewContext<'a>,
    record: &'a FileRecord,
    glyph_size: f32,
) -> Element<'a, Message> {
    if record.has_thumbnail() {
        if let Some(handle) = ctx.thumbnails.peek(&record.id) {
            return image::Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(iced::ContentFit::Cover)
                .into();
        }
    }
    icons::sized(action_icons::gallery::placeholder(record.kind), glyph_size).into()
}

fn metadata_line<'a>(record: &FileRecord) -> Element<'a, Message> {
    let mut parts = vec![format_size(record.size_bytes)];
    if let Some((width, height)) = record.dimensions() {
        if record.kind == FileKind::Image {
            parts.push(format!("{width} × {height}"));
        }
    }
    if let Some(uploaded) = record.created_at.as_deref().and_then(format_uploaded_at) {
        parts.push(uploaded);
    }

    Text::new(parts.join(" · "))
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .into()
}

fn actions<'a>(record: &FileRecord) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .push(action_button(
            action_icons::gallery::download(),
            Message::Download(record.id.clone()),
        ))
        .push(action_button(
            action_icons::gallery::preview(),
            Message::Preview(record.id.clone()),
        ))
        .push(action_button(
            action_icons::gallery::copy_link(),
            Message::CopyLink(record.id.clone()),
        ))
        .push(Space::new().width(Length::Fill))
        .push(action_button(
            icons::tinted(action_icons::gallery::delete(), palette::ERROR_500),
            Message::Delete(record.id.clone()),
        ))
        .into()
}

fn action_button<'a>(icon: Svg<'static>, message: Message) -> Element<'a, Message> {
    button(icons::sized(icon, sizing::ICON_SM))
        .on_press(message)
        .padding(spacing::XXS)
        .style(styles::button::ghost)
        .into()
}
