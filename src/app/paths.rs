// SPDX-License-Identifier: MPL-2.0
//! Location of the settings directory.
//!
//! The first of these wins:
//!
//! 1. an explicit override passed to [`get_app_config_dir_with_override`]
//! 2. `--config-dir`, recorded once at startup by [`init_cli_overrides`]
//! 3. the `CLOUDLIFT_CONFIG_DIR` environment variable, when not blank
//! 4. `Cloudlift/` under the platform config directory (`dirs`)

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "Cloudlift";

/// Environment variable overriding the settings directory.
pub const ENV_CONFIG_DIR: &str = "CLOUDLIFT_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override set twice; keeping the first value");
    }
}

/// Directory holding `settings.toml`, or `None` when the platform has no
/// config directory and nothing overrides it.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(|| {
            std::env::var(ENV_CONFIG_DIR)
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)))
}

/// Serializes tests that change process environment variables.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, PoisonError};
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
