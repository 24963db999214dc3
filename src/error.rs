// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

use crate::domain::upload::Rejection;

/// Errors reading or writing `settings.toml`.
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("invalid settings: {0}")]
    Config(String),
}

/// Specific error types for the upload pipeline.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, ThisError)]
pub enum UploadError {
    /// Cloud name or upload preset is missing; no request can be built.
    #[error("missing configuration: {}", missing.join(", "))]
    Configuration { missing: Vec<String> },

    /// One or more files were refused before any request was made.
    #[error("{}", crate::domain::upload::validation::summarize(.0))]
    Validation(Vec<Rejection>),

    /// The request failed or the service answered with an error.
    #[error("{file_name}: {message}")]
    Transfer { file_name: String, message: String },

    /// Anything else (unreadable local file, aborted task).
    #[error("{0}")]
    Unknown(String),
}

impl UploadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UploadError::Configuration { .. } => "error-upload-configuration",
            UploadError::Validation(_) => "error-upload-validation",
            UploadError::Transfer { .. } => "error-upload-transfer",
            UploadError::Unknown(_) => "error-upload-unknown",
        }
    }

    /// Name of the file this error concerns, when it concerns only one.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            UploadError::Transfer { file_name, .. } => Some(file_name),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
