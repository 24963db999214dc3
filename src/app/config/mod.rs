// SPDX-License-Identifier: MPL-2.0
//! User settings stored in `settings.toml`.
//!
//! ```toml
//! [general]
//! language = "fr"
//! theme_mode = "dark"
//!
//! [upload]
//! cloud_name = "demo"
//! upload_preset = "unsigned_preset"
//! folder = "file-uploads"
//! ```
//!
//! Only the theme is ever written back by the application. Upload values
//! are layered, highest priority first:
//!
//! 1. command-line flags (`--cloud-name`, `--upload-preset`, `--folder`)
//! 2. `CLOUDINARY_*` environment variables, including a `.env` file loaded
//!    at startup
//! 3. the `[upload]` section
//!
//! The file lives in the directory chosen by [`crate::app::paths`].
//!
//! ```no_run
//! use cloudlift::app::config;
//! use cloudlift::ui::theming::ThemeMode;
//!
//! let (mut settings, _warning) = config::load();
//! settings.general.theme_mode = ThemeMode::Light;
//! config::save(&settings).expect("settings directory is writable");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use crate::upload::UploadSettings;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Environment variable holding the cloud name.
pub const ENV_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";

/// Environment variable holding the unsigned upload preset.
pub const ENV_UPLOAD_PRESET: &str = "CLOUDINARY_UPLOAD_PRESET";

/// Environment variable holding the target folder.
pub const ENV_UPLOAD_FOLDER: &str = "CLOUDINARY_UPLOAD_FOLDER";

/// Environment variable overriding the API host (used by tests).
pub const ENV_API_BASE_URL: &str = "CLOUDINARY_API_BASE_URL";

/// `[general]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Locale such as `en-US` or `fr`; the system locale is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// `light`, `dark` or `system`, in any case.
    #[serde(default, deserialize_with = "theme_mode_any_case")]
    pub theme_mode: ThemeMode,
}

/// `[upload]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct UploadConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,
    /// Must be an unsigned preset; no API secret is ever read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// API host without the `/v1_1` path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    /// Clamped to `MIN_CONCURRENT_UPLOADS..=MAX_CONCURRENT_UPLOADS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_uploads: Option<usize>,
}

/// Contents of `settings.toml`. Missing sections take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub upload: UploadConfig,
}

fn theme_mode_any_case<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        _ => Err(serde::de::Error::unknown_variant(
            &raw,
            &["light", "dark", "system"],
        )),
    }
}

/// Upload values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOverrides {
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
    pub folder: Option<String>,
}

/// Resolves upload settings from CLI overrides, the process environment and
/// the `[upload]` section.
pub fn resolve_upload_settings(config: &UploadConfig, cli: &UploadOverrides) -> UploadSettings {
    resolve_upload_settings_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve_upload_settings`] with an injectable environment lookup.
pub fn resolve_upload_settings_with_env<F>(
    config: &UploadConfig,
    cli: &UploadOverrides,
    env: F,
) -> UploadSettings
where
    F: Fn(&str) -> Option<String>,
{
    let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());
    let pick = |cli: &Option<String>, key: &str, file: &Option<String>| {
        cli.clone().or_else(|| env(key)).or_else(|| file.clone())
    };

    UploadSettings {
        cloud_name: pick(&cli.cloud_name, ENV_CLOUD_NAME, &config.cloud_name),
        upload_preset: pick(&cli.upload_preset, ENV_UPLOAD_PRESET, &config.upload_preset),
        folder: pick(&cli.folder, ENV_UPLOAD_FOLDER, &config.folder)
            .unwrap_or_else(|| DEFAULT_UPLOAD_FOLDER.to_string()),
        api_base_url: env(ENV_API_BASE_URL)
            .or_else(|| config.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        max_concurrent_uploads: config
            .max_concurrent_uploads
            .unwrap_or(DEFAULT_MAX_CONCURRENT_UPLOADS)
            .clamp(MIN_CONCURRENT_UPLOADS, MAX_CONCURRENT_UPLOADS),
    }
}

/// Path of `settings.toml` in the resolved settings directory.
pub fn settings_path() -> Option<PathBuf> {
    settings_path_in(None)
}

fn settings_path_in(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(SETTINGS_FILE_NAME))
}

/// Loads settings from the default location.
///
/// A missing file yields the defaults silently. An unreadable or malformed
/// file yields the defaults plus the i18n key of a warning toast.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// [`load`] from `base_dir` instead of the resolved settings directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_path_in(base_dir) else {
        return (Config::default(), None);
    };
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(Error::Io(_)) if !path.exists() => (Config::default(), None),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "settings file ignored");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Parses the settings file at `path`.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read, [`Error::Config`] when it is
/// not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(toml::from_str(&text)?),
        Err(error) if error.kind() == ErrorKind::NotFound => Err(Error::Io(format!(
            "{} does not exist",
            path.display()
        ))),
        Err(error) => Err(error.into()),
    }
}

/// Writes settings to the default location.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// [`save`] into `base_dir` instead of the resolved settings directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match settings_path_in(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => {
            tracing::warn!("no settings directory on this platform; settings not saved");
            Ok(())
        }
    }
}

/// Writes `config` to `path`, creating parent directories.
///
/// The file is written next to its final name and renamed into place so a
/// crash never leaves half a file behind.
///
/// # Errors
///
/// [`Error::Config`] if serialization fails, [`Error::Io`] if a directory
/// or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(config)?;
    let staging = path.with_extension("toml.tmp");
    fs::write(&staging, text)?;
    fs::rename(&staging, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            upload: UploadConfig {
                cloud_name: Some("demo".to_string()),
                upload_preset: Some("unsigned".to_string()),
                folder: None,
                api_base_url: None,
                max_concurrent_uploads: Some(2),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_corrupt_file_returns_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(SETTINGS_FILE_NAME), "[general]\ntheme_mode = \"neon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let file = UploadConfig {
            cloud_name: Some("from-file".into()),
            upload_preset: Some("file-preset".into()),
            folder: Some("file-folder".into()),
            ..UploadConfig::default()
        };
        let cli = UploadOverrides {
            cloud_name: Some("from-cli".into()),
            ..UploadOverrides::default()
        };
        let env = env_of(&[
            (ENV_CLOUD_NAME, "from-env"),
            (ENV_UPLOAD_PRESET, "env-preset"),
        ]);

        let settings = resolve_upload_settings_with_env(&file, &cli, env);

        assert_eq!(settings.cloud_name.as_deref(), Some("from-cli"));
        assert_eq!(settings.upload_preset.as_deref(), Some("env-preset"));
        assert_eq!(settings.folder, "file-folder");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let file = UploadConfig {
            cloud_name: Some("from-file".into()),
            ..UploadConfig::default()
        };
        let env = env_of(&[(ENV_CLOUD_NAME, "  ")]);

        let settings = resolve_upload_settings_with_env(&file, &UploadOverrides::default(), env);

        assert_eq!(settings.cloud_name.as_deref(), Some("from-file"));
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = resolve_upload_settings_with_env(
            &UploadConfig::default(),
            &UploadOverrides::default(),
            env_of(&[]),
        );

        assert_eq!(settings.folder, DEFAULT_UPLOAD_FOLDER);
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.max_concurrent_uploads, DEFAULT_MAX_CONCURRENT_UPLOADS);
        assert_eq!(settings.missing_keys(), ["cloud_name", "upload_preset"]);
    }

    #[test]
    fn concurrency_is_clamped() {
        let file = UploadConfig {
            max_concurrent_uploads: Some(0),
            ..UploadConfig::default()
        };
        let settings =
            resolve_upload_settings_with_env(&file, &UploadOverrides::default(), env_of(&[]));
        assert_eq!(settings.max_concurrent_uploads, MIN_CONCURRENT_UPLOADS);
    }

    #[test]
    fn api_base_url_comes_from_env_for_tests() {
        let env = env_of(&[(ENV_API_BASE_URL, "http://127.0.0.1:4010")]);
        let settings = resolve_upload_settings_with_env(
            &UploadConfig::default(),
            &UploadOverrides::default(),
            env,
        );
        assert_eq!(settings.api_base_url, "http://127.0.0.1:4010");
    }
}
