// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Theme};

fn rounded(edge: Color) -> Border {
    Border {
        color: edge,
        width: border::WIDTH_SM,
        radius: radius::SM.into(),
    }
}

/// Solid button in `base`, lightened on hover and grayed out when disabled.
fn filled(base: Color, hover: Color, status: Status) -> Style {
    let (fill, lift) = match status {
        Status::Hovered => (hover, shadow::MD),
        Status::Disabled => (palette::GRAY_400, shadow::NONE),
        Status::Active | Status::Pressed => (base, shadow::SM),
    };
    Style {
        background: Some(Background::Color(fill)),
        text_color: palette::WHITE,
        border: rounded(base),
        shadow: lift,
        snap: true,
    }
}

/// Main call to action (Choose files, Retry).
pub fn primary(_theme: &Theme, status: Status) -> Style {
    filled(palette::PRIMARY_500, palette::PRIMARY_400, status)
}

/// Destructive action (confirm delete).
pub fn danger(_theme: &Theme, status: Status) -> Style {
    filled(
        palette::ERROR_500,
        Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::ERROR_500
        },
        status,
    )
}

/// Neutral action next to a primary one (Cancel).
pub fn secondary(theme: &Theme, status: Status) -> Style {
    let colors = ColorScheme::for_theme(theme);
    let (fill, edge) = match status {
        Status::Hovered => (colors.surface_tertiary, colors.brand_primary),
        _ => (colors.surface_secondary, colors.text_tertiary),
    };
    Style {
        background: Some(Background::Color(fill)),
        text_color: if status == Status::Disabled {
            colors.text_tertiary
        } else {
            colors.text_primary
        },
        border: rounded(edge),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Segment of a toggle group (category filter, grid/list switch).
pub fn chip(selected: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        if selected {
            primary(theme, status)
        } else {
            secondary(theme, status)
        }
    }
}

/// Drawn when the action is unavailable (uploads not configured).
pub fn disabled() -> impl Fn(&Theme, Status) -> Style {
    |theme: &Theme, _status: Status| secondary(theme, Status::Disabled)
}

/// Translucent button over the preview backdrop.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, Status) -> Style {
    move |_theme: &Theme, status: Status| {
        let a = match status {
            Status::Hovered => alpha_hover,
            Status::Pressed => opacity::OVERLAY_PRESSED,
            Status::Active | Status::Disabled => alpha_normal,
        };
        Style {
            background: Some(Background::Color(Color {
                a,
                ..palette::BLACK
            })),
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless icon button (card actions, toast close).
pub fn ghost(theme: &Theme, status: Status) -> Style {
    let tint = |a: f32| Some(Background::Color(Color { a, ..palette::GRAY_400 }));
    Style {
        background: match status {
            Status::Hovered => tint(opacity::OVERLAY_SUBTLE),
            Status::Pressed => tint(opacity::OVERLAY_MEDIUM),
            Status::Active | Status::Disabled => None,
        },
        text_color: ColorScheme::for_theme(theme).text_primary,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
