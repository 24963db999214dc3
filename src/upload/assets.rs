// SPDX-License-Identifier: MPL-2.0
//! Fetching uploaded assets back from the hosting service.
//!
//! Used for gallery thumbnails, the preview overlay and downloads.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest body accepted for in-memory fetches (thumbnails, previews).
pub const MAX_INLINE_ASSET_BYTES: usize = 25 * 1024 * 1024;

/// Errors from asset fetches.
#[derive(Debug, Clone, Error)]
pub enum AssetError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP status: {0}")]
    Status(String),
    #[error("asset too large ({0} bytes)")]
    TooLarge(u64),
    #[error("IO error: {0}")]
    Io(String),
}

/// URL of a raster rendering of the first page of a PDF.
///
/// The hosting service converts on delivery when the extension is changed.
/// Returns `None` when the URL does not end in `.pdf`.
#[must_use]
pub fn pdf_preview_url(url: &str) -> Option<String> {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };
    let stem_len = path.len().checked_sub(4)?;
    if !path.is_char_boundary(stem_len) || !path[stem_len..].eq_ignore_ascii_case(".pdf") {
        return None;
    }
    let mut converted = format!("{}.jpg", &path[..stem_len]);
    if let Some(query) = query {
        converted.push('?');
        converted.push_str(query);
    }
    Some(converted)
}

/// Fetches an asset into memory.
///
/// # Errors
///
/// Fails on transport errors, non-success status or bodies larger than
/// [`MAX_INLINE_ASSET_BYTES`].
pub async fn fetch_bytes(http: reqwest::Client, url: String) -> Result<Vec<u8>, AssetError> {
    fetch_bounded(http, &url, MAX_INLINE_ASSET_BYTES).await
}

/// Reads the body chunk by chunk and stops as soon as `limit` is exceeded.
async fn fetch_bounded(
    http: reqwest::Client,
    url: &str,
    limit: usize,
) -> Result<Vec<u8>, AssetError> {
    use futures_util::StreamExt;

    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| AssetError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AssetError::Status(response.status().to_string()));
    }

    let declared = response.content_length().unwrap_or(0);
    if declared > limit as u64 {
        return Err(AssetError::TooLarge(declared));
    }

    let mut body = Vec::with_capacity(usize::try_from(declared).unwrap_or(0));
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| AssetError::Request(e.to_string()))?;
        if body.len() + chunk.len() > limit {
            return Err(AssetError::TooLarge((body.len() + chunk.len()) as u64));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Streams an asset to `destination`.
///
/// Returns the destination and the number of bytes written. A partially
/// written file is removed on failure.
///
/// # Errors
///
/// Fails on transport errors, non-success status or write errors.
pub async fn download_to(
    http: reqwest::Client,
    url: String,
    destination: PathBuf,
) -> Result<(PathBuf, u64), AssetError> {
    use futures_util::StreamExt;
    use tokio::io::AsyncWriteExt;

    let response = http
        .get(&url)
        .send()
        .await
        .map_err(|e| AssetError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AssetError::Status(response.status().to_string()));
    }

    let mut file = tokio::fs::File::create(&destination)
        .await
        .map_err(|e| AssetError::Io(e.to_string()))?;

    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                discard(&destination).await;
                return Err(AssetError::Request(e.to_string()));
            }
        };
        if let Err(e) = file.write_all(&chunk).await {
            discard(&destination).await;
            return Err(AssetError::Io(e.to_string()));
        }
        written += chunk.len() as u64;
    }

    if let Err(e) = file.flush().await {
        discard(&destination).await;
        return Err(AssetError::Io(e.to_string()));
    }
    tracing::info!(path = %destination.display(), bytes = written, "download complete");
    Ok((destination, written))
}

async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::debug!(path = %path.display(), error = %e, "could not remove partial download");
    }
}
