// SPDX-License-Identifier: MPL-2.0
//! Semantic action icons mapping.
//!
//! This module provides a semantic layer over [`icons`](super::icons), mapping
//! user actions to their visual icon representations. This separation allows
//! changing an action's icon in one place without modifying all usage sites.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Gallery / Navbar / Toasts          │  ← Uses semantic names
//! ├─────────────────────────────────────────┤
//! │         action_icons (this module)      │  ← Semantic → Visual mapping
//! ├─────────────────────────────────────────┤
//! │         icons (visual primitives)       │  ← Inline SVG documents
//! └─────────────────────────────────────────┘
//! ```
//!
//! Functions are named by **what action they represent**, not what they look like.

use super::icons;

/// Icons for per-card gallery actions.
pub mod gallery {
    use super::icons;
    use crate::domain::upload::FileKind;
    use iced::widget::Svg;

    #[must_use]
    pub fn download() -> Svg<'static> {
        icons::download()
    }

    #[must_use]
    pub fn preview() -> Svg<'static> {
        icons::eye()
    }

    #[must_use]
    pub fn copy_link() -> Svg<'static> {
        icons::link()
    }

    #[must_use]
    pub fn delete() -> Svg<'static> {
        icons::trash()
    }

    /// Placeholder glyph shown instead of a thumbnail.
    #[must_use]
    pub fn placeholder(kind: FileKind) -> Svg<'static> {
        match kind {
            FileKind::Image => icons::image(),
            FileKind::Document => icons::document(),
            FileKind::Other => icons::file(),
        }
    }
}

/// Icons for the navigation bar.
pub mod navbar {
    use super::icons;
    use iced::widget::Svg;

    #[must_use]
    pub fn choose_files() -> Svg<'static> {
        icons::folder_open()
    }

    #[must_use]
    pub fn grid_view() -> Svg<'static> {
        icons::grid()
    }

    #[must_use]
    pub fn list_view() -> Svg<'static> {
        icons::list()
    }

    /// Icon of the theme the toggle switches *to*.
    #[must_use]
    pub fn theme_toggle(is_dark: bool) -> Svg<'static> {
        if is_dark {
            icons::sun()
        } else {
            icons::moon()
        }
    }
}

/// Icons for the drop zone and upload progress.
pub mod upload {
    use super::icons;
    use iced::widget::Svg;

    #[must_use]
    pub fn drop_target() -> Svg<'static> {
        icons::cloud_upload()
    }
}

/// Icons for overlays and toast notifications.
pub mod notification {
    use super::icons;
    use iced::widget::Svg;

    #[must_use]
    pub fn success() -> Svg<'static> {
        icons::checkmark()
    }

    #[must_use]
    pub fn info() -> Svg<'static> {
        icons::info()
    }

    #[must_use]
    pub fn warning() -> Svg<'static> {
        icons::warning()
    }

    #[must_use]
    pub fn error() -> Svg<'static> {
        icons::warning()
    }

    /// Close a toast, dialog or overlay.
    #[must_use]
    pub fn close() -> Svg<'static> {
        icons::cross()
    }
}
