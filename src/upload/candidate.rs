// SPDX-License-Identifier: MPL-2.0
//! Local files offered for upload.
//!
//! Only metadata is read when a file is dropped. The content is read when
//! its request is actually sent, so refused files are never opened.

use super::extensions::mime_type_for_path;
use crate::domain::upload::Candidate;
use std::path::{Path, PathBuf};

/// A dropped or selected file, described by its path and declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    /// Describes a file without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        let path = path.into();
        let file_name = file_name_of(&path);
        let mime_type = mime_type_for_path(&path).to_string();
        Self {
            path,
            file_name,
            mime_type,
            size_bytes,
        }
    }

    /// What the validation gate sees of this file.
    #[must_use]
    pub fn as_candidate(&self) -> Candidate {
        Candidate::new(self.file_name.clone(), self.mime_type.clone(), self.size_bytes)
    }
}

/// A path that could not be described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unreadable {
    pub file_name: String,
    pub message: String,
}

/// Result of looking at the paths of one drop/select event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inspection {
    pub candidates: Vec<UploadCandidate>,
    pub unreadable: Vec<Unreadable>,
}

/// Reads the metadata of each path, keeping input order.
///
/// Directories and paths whose metadata cannot be read end up in
/// [`Inspection::unreadable`].
pub async fn inspect_paths(paths: Vec<PathBuf>) -> Inspection {
    let mut inspection = Inspection::default();
    for path in paths {
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {
                inspection
                    .candidates
                    .push(UploadCandidate::new(path, meta.len()));
            }
            Ok(_) => inspection.unreadable.push(Unreadable {
                file_name: file_name_of(&path),
                message: "not a regular file".to_string(),
            }),
            Err(err) => inspection.unreadable.push(Unreadable {
                file_name: file_name_of(&path),
                message: err.to_string(),
            }),
        }
    }
    inspection
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
