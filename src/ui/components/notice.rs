// SPDX-License-Identifier: MPL-2.0
//! Notice panel used for blocking problems and empty states.
//!
//! The configuration screen shows one as an error with the settings file
//! path behind a details toggle; the preview shows one as information when
//! a file has no raster to display.
//!
//! ```ignore
//! Notice::new(Tone::Error)
//!     .title("Uploads are not configured")
//!     .body("Missing: cloud_name")
//!     .details("…/cloudlift/settings.toml", labels, details_open, Message::ToggleDetails)
//!     .action("Retry", Message::RetryConfiguration)
//!     .centered()
//! ```

use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{action_icons, icons};
use iced::widget::{button, container, rule, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

const MAX_WIDTH: f32 = 520.0;

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Something blocks the user (red).
    #[default]
    Error,
    /// Nothing is wrong, there is just nothing to show (blue).
    Info,
}

impl Tone {
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Tone::Error => palette::ERROR_500,
            Tone::Info => palette::INFO_500,
        }
    }

    fn glyph(self) -> iced::widget::Svg<'static> {
        let glyph = match self {
            Tone::Error => action_icons::notification::error(),
            Tone::Info => action_icons::notification::info(),
        };
        icons::sized(icons::tinted(glyph, self.accent()), sizing::ICON_XL)
    }
}

/// Localized labels for the details toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsLabels {
    pub show: String,
    pub hide: String,
    pub heading: String,
}

#[derive(Debug, Clone)]
struct Details<Message> {
    text: String,
    labels: DetailsLabels,
    open: bool,
    on_toggle: Message,
}

/// Builder for a notice panel.
#[derive(Debug, Clone)]
pub struct Notice<Message> {
    tone: Tone,
    title: Option<String>,
    body: Option<String>,
    details: Option<Details<Message>>,
    action: Option<(String, Message)>,
}

impl<Message: Clone + 'static> Notice<Message> {
    #[must_use]
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            title: None,
            body: None,
            details: None,
            action: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a collapsible details section; `open` is owned by the caller.
    #[must_use]
    pub fn details(
        mut self,
        text: impl Into<String>,
        labels: DetailsLabels,
        open: bool,
        on_toggle: Message,
    ) -> Self {
        self.details = Some(Details {
            text: text.into(),
            labels,
            open,
            on_toggle,
        });
        self
    }

    /// Adds the primary button.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Label currently shown on the details toggle, if any.
    #[must_use]
    pub fn toggle_label(&self) -> Option<&str> {
        self.details.as_ref().map(|details| {
            if details.open {
                details.labels.hide.as_str()
            } else {
                details.labels.show.as_str()
            }
        })
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent = self.tone.accent();
        let toggle_label = self.toggle_label().map(str::to_string);

        let mut column = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center);

        if let Some(title) = self.title {
            column = column.push(
                Text::new(title)
                    .size(typography::TITLE_MD)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            );
        }
        if let Some(body) = self.body {
            column = column.push(Text::new(body).size(typography::BODY));
        }
        if let Some((label, message)) = self.action {
            column = column.push(
                Container::new(
                    button(Text::new(label))
                        .on_press(message)
                        .style(button_styles::primary),
                )
                .padding(spacing::XS),
            );
        }
        if let (Some(details), Some(label)) = (self.details, toggle_label) {
            column = column.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .on_press(details.on_toggle)
                    .style(button_styles::ghost),
            );
            if details.open {
                column = column.push(details_section(details.labels.heading, details.text));
            }
        }

        Container::new(
            Row::new()
                .spacing(spacing::MD)
                .align_y(alignment::Vertical::Top)
                .push(self.tone.glyph())
                .push(column),
        )
        .width(Length::Fill)
        .max_width(MAX_WIDTH)
        .padding(spacing::LG)
        .style(panel)
        .into()
    }

    /// Renders the notice centered in all available space.
    pub fn centered(self) -> Element<'static, Message> {
        Container::new(self.view())
            .center(Length::Fill)
            .padding(spacing::LG)
            .into()
    }
}

fn details_section<Message: 'static>(heading: String, body: String) -> Element<'static, Message> {
    let muted = |theme: &Theme| text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    };
    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(rule::horizontal(1))
        .push(Text::new(heading).size(typography::BODY).style(muted))
        .push(Text::new(body).size(typography::CAPTION).style(muted))
        .into()
}

fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}
