// SPDX-License-Identifier: MPL-2.0
use cloudlift::app::config::{
    self, Config, GeneralConfig, UploadConfig, UploadOverrides, DEFAULT_UPLOAD_FOLDER,
};
use cloudlift::i18n::fluent::I18n;
use cloudlift::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_file = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&english, &settings_file).expect("Failed to write english config");
    let loaded = config::load_from_path(&settings_file).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("app-title"), "Cloudlift");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &settings_file).expect("Failed to write french config");
    let loaded = config::load_from_path(&settings_file).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("navbar-choose-files"), i18n_en.tr("navbar-choose-files"));
}

#[test]
fn test_cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_settings_round_trip_keeps_upload_section() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let saved = Config {
        general: GeneralConfig {
            language: None,
            theme_mode: ThemeMode::Dark,
        },
        upload: UploadConfig {
            cloud_name: Some("demo".to_string()),
            upload_preset: Some("unsigned_preset".to_string()),
            folder: Some("team-drop".to_string()),
            api_base_url: None,
            max_concurrent_uploads: Some(2),
        },
    };
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, saved);

    let settings = config::resolve_upload_settings_with_env(
        &loaded.upload,
        &UploadOverrides::default(),
        |_| None,
    );
    assert_eq!(settings.folder, "team-drop");
    assert_eq!(settings.max_concurrent_uploads, 2);
    assert!(settings.missing_keys().is_empty());
}

#[test]
fn test_environment_fills_gaps_left_by_file() {
    let file = UploadConfig {
        cloud_name: Some("from-file".to_string()),
        ..UploadConfig::default()
    };
    let overrides = UploadOverrides {
        cloud_name: Some("from-cli".to_string()),
        ..UploadOverrides::default()
    };

    let settings = config::resolve_upload_settings_with_env(&file, &overrides, |key| {
        (key == config::ENV_UPLOAD_PRESET).then(|| "from-env".to_string())
    });

    assert_eq!(settings.cloud_name.as_deref(), Some("from-cli"));
    assert_eq!(settings.upload_preset.as_deref(), Some("from-env"));
    assert_eq!(settings.folder, DEFAULT_UPLOAD_FOLDER);
}

#[test]
fn test_malformed_settings_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[upload\ncloud_name = ")
        .expect("Failed to write broken config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
