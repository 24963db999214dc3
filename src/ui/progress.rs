// SPDX-License-Identifier: MPL-2.0
//! Floating pill showing the progress of the running batch.

use crate::domain::upload::UploadBatch;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{progress_bar, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Render the pill for `batch`.
pub fn view<'a, Message: 'a>(i18n: &I18n, batch: &UploadBatch) -> Element<'a, Message> {
    let completed = batch.completed().to_string();
    let total = batch.total().to_string();
    let percent = batch.percent();

    let label = Text::new(i18n.tr_with_args(
        "progress-uploading",
        &[("completed", completed.as_str()), ("total", total.as_str())],
    ))
    .size(typography::BODY_SM);

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(progress_bar(0.0..=100.0, f32::from(percent)))
        .push(Text::new(format!("{percent}%")).size(typography::CAPTION));

    Container::new(Column::new().spacing(spacing::XXS).push(label).push(bar))
        .width(Length::Fixed(sizing::PROGRESS_WIDTH))
        .padding([spacing::XS, spacing::MD])
        .style(styles::overlay::progress_pill)
        .into()
}
