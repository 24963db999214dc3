// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the gallery, the upload zone, the overlays
//! and the toasts.
//!
//! Styles in [`crate::ui::styles`] and the theme schemes in
//! [`crate::ui::theming`] read from here; widgets should not hard-code
//! colors or sizes.
//!
//! ```
//! use cloudlift::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::OVERLAY_STRONG, ..palette::BLACK };
//! let gap = spacing::MD;
//! # let _ = (scrim, gap);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.10, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.29, 0.31, 0.35);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.47, 0.52);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.80, 0.83);
    pub const GRAY_100: Color = Color::from_rgb(0.91, 0.92, 0.94);

    /// Sky blue accent: selected filters, primary buttons, the drop target.
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.71, 0.96);
    pub const PRIMARY_500: Color = Color::from_rgb(0.20, 0.56, 0.88);
    pub const PRIMARY_600: Color = Color::from_rgb(0.13, 0.45, 0.76);

    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.22, 0.23);
    pub const WARNING_500: Color = Color::from_rgb(0.93, 0.60, 0.13);
    pub const SUCCESS_500: Color = Color::from_rgb(0.20, 0.66, 0.42);
    pub const INFO_500: Color = Color::from_rgb(0.40, 0.52, 0.95);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.15;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Modal backdrop.
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    /// Floating panels (progress pill, cards over the backdrop).
    pub const SURFACE: f32 = 0.96;
}

/// 4px steps.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 22.0;
    pub const ICON_XL: f32 = 44.0;
    /// File-type placeholder in grid cards.
    pub const ICON_XXL: f32 = 64.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const TOAST_WIDTH: f32 = 340.0;
    pub const DIALOG_WIDTH: f32 = 420.0;
    pub const PROGRESS_WIDTH: f32 = 280.0;
    pub const UPLOAD_ZONE_MIN_HEIGHT: f32 = 160.0;
}

pub mod typography {
    /// Dialog and notice headings.
    pub const TITLE_MD: f32 = 20.0;
    /// App name in the navbar, file name in the preview.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// File sizes, dates, category counts.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accents and the dashed look of the drop target.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Progress pill.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    const fn drop(y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: palette::BLACK,
            offset: Vector { x: 0.0, y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = drop(0.0, 0.0);
    pub const SM: Shadow = drop(1.0, 3.0);
    pub const MD: Shadow = drop(3.0, 8.0);
    pub const LG: Shadow = drop(8.0, 20.0);
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);
    assert!(spacing::XL < spacing::XXL);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::SURFACE < 1.0);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(sizing::DIALOG_WIDTH > sizing::TOAST_WIDTH);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_four_pixel_steps() {
        for step in [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ] {
            assert_eq!(step % 4.0, 0.0, "{step} is off the grid");
        }
    }

    #[test]
    fn hover_accent_is_lighter_than_pressed() {
        assert!(palette::PRIMARY_400.r > palette::PRIMARY_600.r);
    }
}
