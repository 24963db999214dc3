// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Only the theme preference is written back to `settings.toml`; the
//! gallery layout and every upload stay in memory.

use super::config;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Persists the theme preference, keeping every other key of the file.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic
/// through [`persist_theme_in`]. Returns the i18n key of a warning to show
/// when the preference was not written.
pub fn persist_theme(theme_mode: ThemeMode) -> Option<&'static str> {
    if cfg!(test) {
        return None;
    }
    persist_theme_in(None, theme_mode)
}

/// [`persist_theme`] against the settings file under `base_dir`.
///
/// A file that failed to parse is left as it is.
fn persist_theme_in(base_dir: Option<PathBuf>, theme_mode: ThemeMode) -> Option<&'static str> {
    let (mut cfg, load_warning) = config::load_with_override(base_dir.clone());
    if load_warning.is_some() {
        tracing::warn!("settings file unreadable, theme not saved");
        return Some("notification-theme-not-saved");
    }
    apply_theme(&mut cfg, theme_mode);

    match config::save_with_override(&cfg, base_dir) {
        Ok(()) => None,
        Err(error) => {
            tracing::warn!(%error, "failed to save settings");
            Some("notification-config-save-error")
        }
    }
}

/// Writes `theme_mode` into `cfg`.
pub fn apply_theme(cfg: &mut config::Config, theme_mode: ThemeMode) {
    cfg.general.theme_mode = theme_mode;
}
