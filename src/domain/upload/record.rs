// SPDX-License-Identifier: MPL-2.0
//! Uploaded file records.
//!
//! A [`FileRecord`] is the client-side representation of one asset that the
//! hosting service accepted. Records are created only from a successful
//! upload response and never from local data.

use std::fmt;

/// Opaque identifier assigned by the hosting service (`public_id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps a service-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad category of an uploaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Raster image (PNG, JPEG, GIF, WebP).
    Image,
    /// Paged document (PDF).
    Document,
    /// Anything the gallery cannot render.
    Other,
}

impl FileKind {
    /// Derives the kind from the service's `resource_type` and `format` tags.
    ///
    /// The hosting service stores PDFs as `image` resources, so the format is
    /// checked first.
    #[must_use]
    pub fn from_service_tags(resource_type: &str, format: Option<&str>) -> Self {
        if format.is_some_and(|f| f.eq_ignore_ascii_case("pdf")) {
            return FileKind::Document;
        }
        if resource_type.eq_ignore_ascii_case("image") {
            FileKind::Image
        } else {
            FileKind::Other
        }
    }
}

/// One successfully uploaded asset.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub id: RecordId,
    pub original_name: String,
    pub url: String,
    pub kind: FileKind,
    pub size_bytes: u64,
    /// Format tag reported by the service (e.g. `png`, `pdf`).
    pub format: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Upload timestamp as reported by the service (RFC 3339).
    pub created_at: Option<String>,
}

impl FileRecord {
    /// Creates a record with the required fields; optional metadata is empty.
    pub fn new(
        id: RecordId,
        original_name: impl Into<String>,
        url: impl Into<String>,
        kind: FileKind,
        size_bytes: u64,
    ) -> Self {
        Self {
            id,
            original_name: original_name.into(),
            url: url.into(),
            kind,
            size_bytes,
            format: None,
            width: None,
            height: None,
            created_at: None,
        }
    }

    /// Returns `true` if the gallery can draw a thumbnail for this record.
    #[must_use]
    pub fn has_thumbnail(&self) -> bool {
        matches!(self.kind, FileKind::Image)
    }

    /// Returns the pixel dimensions when the service reported them.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }
}

/// Builds the user-facing filename from the service's `original_filename`
/// (which has no extension) and the reported format.
#[must_use]
pub fn display_name(original_filename: &str, format: Option<&str>) -> String {
    match format {
        Some(ext) if !ext.is_empty() => {
            let suffix = format!(".{ext}");
            if original_filename
                .to_ascii_lowercase()
                .ends_with(&suffix.to_ascii_lowercase())
            {
                original_filename.to_string()
            } else {
                format!("{original_filename}{suffix}")
            }
        }
        _ => original_filename.to_string(),
    }
}

/// Formats a byte count for display (`512 B`, `1.5 KB`, `10.0 MB`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
