// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Toasts are stacked in the bottom-right corner as cards with a
//! severity-colored border and a close button.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{action_icons, icons};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().accent();

        let close = button(icons::sized(
            action_icons::notification::close(),
            sizing::ICON_SM,
        ))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(button_styles::ghost);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(
                icons::tinted(notification.severity().glyph(), accent),
                sizing::ICON_MD,
            ))
            .push(
                Text::new(notification.text(i18n))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(close);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card(theme, accent))
            .into()
    }

    /// All visible toasts, anchored bottom-right. Empty when there are none.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if manager.is_empty() {
            return Space::new().into();
        }

        let stack = Column::with_children(
            manager
                .visible()
                .map(|notification| Self::view(notification, i18n)),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn card(theme: &Theme, accent: Color) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}
