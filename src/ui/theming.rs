// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes and the persisted theme preference.
//!
//! Widgets receive an Iced [`Theme`] in their style closures; they map it
//! back to a [`ColorScheme`] with [`ColorScheme::for_theme`].

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors that differ between the light and dark themes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Window background, toast cards.
    pub surface_primary: Color,
    /// Cards, panels, the idle drop target.
    pub surface_secondary: Color,
    /// Borders and hovered neutral buttons.
    pub surface_tertiary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    /// Accent for selection and the hovered drop target.
    pub brand_primary: Color,
}

const LIGHT: ColorScheme = ColorScheme {
    surface_primary: palette::WHITE,
    surface_secondary: palette::GRAY_100,
    surface_tertiary: palette::GRAY_200,
    text_primary: palette::GRAY_900,
    text_secondary: palette::GRAY_700,
    text_tertiary: palette::GRAY_400,
    brand_primary: palette::PRIMARY_500,
};

const DARK: ColorScheme = ColorScheme {
    surface_primary: palette::GRAY_900,
    surface_secondary: Color::from_rgb(0.14, 0.15, 0.18),
    surface_tertiary: Color::from_rgb(0.21, 0.22, 0.26),
    text_primary: palette::WHITE,
    text_secondary: palette::GRAY_200,
    text_tertiary: palette::GRAY_400,
    brand_primary: palette::PRIMARY_400,
};

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        LIGHT
    }

    #[must_use]
    pub fn dark() -> Self {
        DARK
    }

    /// Scheme for a theme produced by [`ThemeMode::iced_theme`].
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Light) {
            LIGHT
        } else {
            DARK
        }
    }
}

/// Theme preference stored as `general.theme_mode` in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the desktop setting.
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark. `System` asks the desktop and
    /// falls back to dark when it cannot tell.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Mode after a press on the navbar toggle. Always explicit.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
