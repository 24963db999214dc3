// SPDX-License-Identifier: MPL-2.0
//! Drop target shown above the gallery.
//!
//! The zone is highlighted while files hover the window and can be clicked
//! to open the file picker. Drops are caught at the window level, so files
//! released anywhere in the window are accepted.

use crate::domain::upload::{record::format_size, MAX_FILE_SIZE_BYTES};
use crate::i18n::fluent::I18n;
use crate::ui::action_icons;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{mouse_area, Column, Container, Text};
use iced::{alignment, mouse, Color, Element, Length};

/// Contextual data needed to render the zone.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Files are being dragged over the window.
    pub hovering: bool,
    /// Uploads are configured; otherwise the zone is inert.
    pub can_upload: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ChooseFiles,
}

/// Renders the drop zone.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let icon = icons::sized(action_icons::upload::drop_target(), sizing::ICON_XL);

    let title_key = if ctx.hovering {
        "upload-zone-drop-here"
    } else {
        "upload-zone-title"
    };
    let title = Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_SM);

    let limit = format_size(MAX_FILE_SIZE_BYTES);
    let hint = Text::new(
        ctx.i18n
            .tr_with_args("upload-zone-hint", &[("limit", limit.as_str())]),
    )
    .size(typography::CAPTION)
    .color(Color {
        a: 0.7,
        ..palette::GRAY_400
    });

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(hint);

    let zone = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::UPLOAD_ZONE_MIN_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::upload_zone(ctx.hovering));

    if ctx.can_upload {
        mouse_area(zone)
            .on_press(Message::ChooseFiles)
            .interaction(mouse::Interaction::Pointer)
            .into()
    } else {
        zone.into()
    }
}
