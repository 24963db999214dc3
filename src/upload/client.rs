// SPDX-License-Identifier: MPL-2.0
//! Unsigned uploads to the hosting service.
//!
//! One multipart `POST {api_base}/v1_1/{cloud}/auto/upload` is sent per
//! file. Requests of a batch run as independent tasks; a shared semaphore
//! bounds how many are in flight at once.

use super::candidate::UploadCandidate;
use crate::app::config::{
    DEFAULT_API_BASE_URL, DEFAULT_MAX_CONCURRENT_UPLOADS, DEFAULT_UPLOAD_FOLDER,
};
use crate::domain::upload::record::display_name;
use crate::domain::upload::{FileKind, FileRecord, RecordId};
use crate::error::UploadError;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("Cloudlift/", env!("CARGO_PKG_VERSION"));

/// Everything needed to reach the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
    pub folder: String,
    pub api_base_url: String,
    pub max_concurrent_uploads: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            cloud_name: None,
            upload_preset: None,
            folder: DEFAULT_UPLOAD_FOLDER.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_concurrent_uploads: DEFAULT_MAX_CONCURRENT_UPLOADS,
        }
    }
}

impl UploadSettings {
    /// Names of the required keys that are absent or blank.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<String> {
        let blank = |value: &Option<String>| value.as_deref().is_none_or(|v| v.trim().is_empty());
        let mut missing = Vec::new();
        if blank(&self.cloud_name) {
            missing.push("cloud_name".to_string());
        }
        if blank(&self.upload_preset) {
            missing.push("upload_preset".to_string());
        }
        missing
    }
}

/// Success body of the upload endpoint (fields we use).
#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
    #[serde(default)]
    original_filename: Option<String>,
    #[serde(default)]
    resource_type: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    bytes: Option<u64>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    created_at: Option<String>,
}

impl UploadResponse {
    fn into_record(self, candidate: &UploadCandidate) -> FileRecord {
        let kind = FileKind::from_service_tags(
            self.resource_type.as_deref().unwrap_or_default(),
            self.format.as_deref(),
        );
        let original_name = match self.original_filename.as_deref() {
            Some(name) if !name.is_empty() => display_name(name, self.format.as_deref()),
            _ => candidate.file_name.clone(),
        };
        let mut record = FileRecord::new(
            RecordId::new(self.public_id),
            original_name,
            self.secure_url,
            kind,
            self.bytes.unwrap_or(candidate.size_bytes),
        );
        record.format = self.format;
        record.width = self.width;
        record.height = self.height;
        record.created_at = self.created_at;
        record
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extracts `error.message` from an error body, if it has one.
fn service_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
}

/// Cheap to clone; clones share the HTTP connection pool and the permits.
#[derive(Debug, Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    endpoint: String,
    upload_preset: String,
    folder: String,
    permits: Arc<Semaphore>,
}

impl UploadClient {
    /// Builds a client, failing fast when required settings are missing.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Configuration`] naming the missing keys, or
    /// [`UploadError::Unknown`] if the HTTP client cannot be built.
    pub fn new(settings: &UploadSettings) -> Result<Self, UploadError> {
        let missing = settings.missing_keys();
        let (Some(cloud_name), Some(upload_preset), true) = (
            settings.cloud_name.as_deref(),
            settings.upload_preset.as_deref(),
            missing.is_empty(),
        ) else {
            return Err(UploadError::Configuration { missing });
        };

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| UploadError::Unknown(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: upload_endpoint(&settings.api_base_url, cloud_name.trim()),
            upload_preset: upload_preset.trim().to_string(),
            folder: settings.folder.clone(),
            permits: Arc::new(Semaphore::new(settings.max_concurrent_uploads.max(1))),
        })
    }

    /// URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The shared HTTP client, reused for asset fetches.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Uploads one file and returns its record.
    ///
    /// # Errors
    ///
    /// - [`UploadError::Unknown`] if the local file cannot be read.
    /// - [`UploadError::Transfer`] if the request fails, the service answers
    ///   with a non-success status (carrying its `error.message` verbatim when
    ///   present) or the body cannot be parsed.
    pub async fn upload(&self, candidate: UploadCandidate) -> Result<FileRecord, UploadError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| UploadError::Unknown(e.to_string()))?;

        let bytes = tokio::fs::read(&candidate.path).await.map_err(|e| {
            UploadError::Unknown(format!("{}: {e}", candidate.file_name))
        })?;

        let transfer = |message: String| UploadError::Transfer {
            file_name: candidate.file_name.clone(),
            message,
        };

        let part = Part::bytes(bytes)
            .file_name(candidate.file_name.clone())
            .mime_str(&candidate.mime_type)
            .map_err(|e| transfer(e.to_string()))?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", self.folder.clone());

        tracing::debug!(file = %candidate.file_name, endpoint = %self.endpoint, "sending upload");

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transfer(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| transfer(e.to_string()))?;

        if !status.is_success() {
            let message = service_error_message(&body).unwrap_or_else(|| status.to_string());
            tracing::warn!(file = %candidate.file_name, %status, %message, "upload rejected");
            return Err(transfer(message));
        }

        let parsed: UploadResponse = serde_json::from_str(&body)
            .map_err(|e| transfer(format!("invalid response: {e}")))?;
        let record = parsed.into_record(&candidate);
        tracing::info!(file = %record.original_name, id = %record.id, "upload complete");
        Ok(record)
    }
}

fn upload_endpoint(api_base_url: &str, cloud_name: &str) -> String {
    format!(
        "{}/v1_1/{}/auto/upload",
        api_base_url.trim_end_matches('/'),
        cloud_name
    )
}
