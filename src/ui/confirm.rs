// SPDX-License-Identifier: MPL-2.0
//! Delete confirmation dialog.

use crate::domain::upload::{FileRecord, RecordId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// A delete waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub record_id: RecordId,
    pub file_name: String,
}

impl PendingDeletion {
    #[must_use]
    pub fn for_record(record: &FileRecord) -> Self {
        Self {
            record_id: record.id.clone(),
            file_name: record.original_name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Confirm,
    Cancel,
}

/// Render the dialog; the caller places it in a modal layer.
pub fn view<'a>(i18n: &'a I18n, pending: &'a PendingDeletion) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("delete-dialog-title")).size(typography::TITLE_SM);
    let body = Text::new(i18n.tr_with_args(
        "delete-dialog-message",
        &[("file", pending.file_name.as_str())],
    ))
    .size(typography::BODY);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("delete-dialog-cancel")))
                .on_press(Message::Cancel)
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("delete-dialog-confirm")))
                .on_press(Message::Confirm)
                .style(styles::button::danger),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(body)
            .push(buttons),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}
