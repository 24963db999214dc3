// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above the gallery.
//!
//! Holds the application title, the *Choose files* button, the grid/list
//! toggle and the theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::action_icons;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::ViewMode;
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view_mode: ViewMode,
    pub is_dark_theme: bool,
    /// Uploads are configured; otherwise *Choose files* is disabled.
    pub can_upload: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ChooseFiles,
    SetViewMode(ViewMode),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ChooseFiles,
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, view_mode: &mut ViewMode) -> Event {
    match message {
        Message::ChooseFiles => Event::ChooseFiles,
        Message::SetViewMode(mode) => {
            *view_mode = mode;
            Event::None
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let choose_content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(
            icons::tinted(action_icons::navbar::choose_files(), palette::WHITE),
            sizing::ICON_SM,
        ))
        .push(Text::new(ctx.i18n.tr("navbar-choose-files")));
    let choose_button = if ctx.can_upload {
        button(choose_content)
            .on_press(Message::ChooseFiles)
            .style(styles::button::primary)
    } else {
        button(choose_content).style(styles::button::disabled())
    };

    let view_toggle = Row::new()
        .spacing(spacing::XXS)
        .push(view_mode_button(
            action_icons::navbar::grid_view(),
            ViewMode::Grid,
            ctx.view_mode,
        ))
        .push(view_mode_button(
            action_icons::navbar::list_view(),
            ViewMode::List,
            ctx.view_mode,
        ));

    let theme_button = button(icons::sized(
        action_icons::navbar::theme_toggle(ctx.is_dark_theme),
        sizing::ICON_MD,
    ))
    .on_press(Message::ToggleTheme)
    .padding(spacing::XS)
    .style(styles::button::ghost);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(choose_button)
        .push(view_toggle)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn view_mode_button<'a>(
    icon: iced::widget::Svg<'static>,
    mode: ViewMode,
    current: ViewMode,
) -> Element<'a, Message> {
    let selected = mode == current;
    let icon = if selected {
        icons::tinted(icon, palette::WHITE)
    } else {
        icon
    };
    button(icons::sized(icon, sizing::ICON_SM))
        .on_press(Message::SetViewMode(mode))
        .padding(spacing::XS)
        .style(styles::button::chip(selected))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_view_mode_updates_state_without_event() {
        let mut mode = ViewMode::Grid;
        let event = update(Message::SetViewMode(ViewMode::List), &mut mode);
        assert_eq!(mode, ViewMode::List);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn actions_are_forwarded_as_events() {
        let mut mode = ViewMode::Grid;
        assert_eq!(update(Message::ChooseFiles, &mut mode), Event::ChooseFiles);
        assert_eq!(update(Message::ToggleTheme, &mut mode), Event::ToggleTheme);
        assert_eq!(mode, ViewMode::Grid);
    }
}
