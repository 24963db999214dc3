// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small monochrome SVG documents compiled into the binary. Their
//! handles are cached using `OnceLock` so each document is parsed once.
//! Color comes from the widget style (see [`tinted`]), which lets a single
//! icon serve both light and dark themes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let delete = button(icons::sized(icons::trash(), 16.0));
//! ```
//!
//! For semantic names, use [`action_icons`](super::action_icons).
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `delete_upload`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone()).style(themed)
        }
    };
}

// =============================================================================
// Upload & File Icons
// =============================================================================

define_icon!(
    cloud_upload,
    r#"<path d="M7 18a5 5 0 0 1-.9-9.9A6 6 0 0 1 17.7 9 4.5 4.5 0 0 1 17.5 18"/><path d="M12 12v9"/><path d="M8.5 15.5 12 12l3.5 3.5"/>"#,
    "Cloud with an upward arrow."
);
define_icon!(
    file,
    r#"<path d="M14 3H7a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2V8z"/><path d="M14 3v5h5"/>"#,
    "Blank sheet with a folded corner."
);
define_icon!(
    document,
    r#"<path d="M14 3H7a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2V8z"/><path d="M14 3v5h5"/><path d="M9 13h6"/><path d="M9 17h6"/>"#,
    "Sheet with text lines."
);
define_icon!(
    image,
    r#"<rect x="3" y="4" width="18" height="16" rx="2"/><circle cx="9" cy="10" r="2"/><path d="m21 17-5-5-9 8"/>"#,
    "Picture frame with a mountain and sun."
);
define_icon!(
    folder_open,
    r#"<path d="M3 7a2 2 0 0 1 2-2h4l2 2h8a2 2 0 0 1 2 2v1"/><path d="M3 7v11a2 2 0 0 0 2 2h12.5a2 2 0 0 0 1.9-1.4L22 12H7.5a2 2 0 0 0-1.9 1.4L3 20"/>"#,
    "Open folder."
);

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(
    download,
    r#"<path d="M12 4v11"/><path d="m7 10 5 5 5-5"/><path d="M5 20h14"/>"#,
    "Arrow pointing down onto a tray."
);
define_icon!(
    eye,
    r#"<path d="M2 12s3.5-7 10-7 10 7 10 7-3.5 7-10 7S2 12 2 12z"/><circle cx="12" cy="12" r="3"/>"#,
    "Open eye."
);
define_icon!(
    trash,
    r#"<path d="M4 7h16"/><path d="M10 11v6"/><path d="M14 11v6"/><path d="M6 7l1 13h10l1-13"/><path d="M9 7V4h6v3"/>"#,
    "Trash can."
);
define_icon!(
    link,
    r#"<path d="M10 14a4 4 0 0 0 5.7 0l3-3a4 4 0 0 0-5.7-5.7l-1 1"/><path d="M14 10a4 4 0 0 0-5.7 0l-3 3a4 4 0 0 0 5.7 5.7l1-1"/>"#,
    "Two chain links."
);
define_icon!(cross, r#"<path d="M6 6l12 12"/><path d="M18 6 6 18"/>"#, "Cross icon: X mark shape.");

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    checkmark,
    r#"<circle cx="12" cy="12" r="9"/><path d="m8 12 3 3 5-6"/>"#,
    "Checkmark in a circle."
);
define_icon!(
    info,
    r#"<circle cx="12" cy="12" r="9"/><path d="M12 11v6"/><path d="M12 7.5v.5"/>"#,
    "Info icon: letter 'i' in circle."
);
define_icon!(
    warning,
    r#"<path d="M12 3 2 20h20z"/><path d="M12 10v4"/><path d="M12 17v.5"/>"#,
    "Warning triangle with an exclamation mark."
);

// =============================================================================
// View & Theme Icons
// =============================================================================

define_icon!(
    grid,
    r#"<rect x="4" y="4" width="7" height="7" rx="1"/><rect x="13" y="4" width="7" height="7" rx="1"/><rect x="4" y="13" width="7" height="7" rx="1"/><rect x="13" y="13" width="7" height="7" rx="1"/>"#,
    "Four squares in a grid."
);
define_icon!(
    list,
    r#"<path d="M9 6h11"/><path d="M9 12h11"/><path d="M9 18h11"/><path d="M4 6h.5"/><path d="M4 12h.5"/><path d="M4 18h.5"/>"#,
    "Bulleted list."
);
define_icon!(
    sun,
    r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="M4.9 4.9l1.4 1.4"/><path d="M17.7 17.7l1.4 1.4"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="M4.9 19.1l1.4-1.4"/><path d="M17.7 6.3l1.4-1.4"/>"#,
    "Sun with rays."
);
define_icon!(
    moon,
    r#"<path d="M20 14.5A8 8 0 1 1 9.5 4a6.5 6.5 0 0 0 10.5 10.5z"/>"#,
    "Crescent moon."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Default tint: the theme's text color.
fn themed(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.palette().text),
    }
}

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
#[must_use]
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints an icon with a fixed color, e.g. white on a brand-colored button.
#[must_use]
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}
