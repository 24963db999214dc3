// SPDX-License-Identifier: MPL-2.0
//! Talking to the hosting service.
//!
//! This module turns local paths into upload candidates, sends them to the
//! hosting service and fetches uploaded assets back for thumbnails,
//! previews and downloads.

pub mod assets;
pub mod candidate;
pub mod client;

// Re-export commonly used types
pub use candidate::{inspect_paths, Inspection, UploadCandidate};
pub use client::{UploadClient, UploadSettings};

/// Declared MIME types of local files
pub mod extensions {
    use std::path::Path;

    /// MIME type declared for files with an unknown extension.
    pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

    /// Extension to MIME type table, lowercase extensions.
    pub const MIME_BY_EXTENSION: &[(&str, &str)] = &[
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("jpe", "image/jpeg"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("pdf", "application/pdf"),
        ("svg", "image/svg+xml"),
        ("bmp", "image/bmp"),
        ("tif", "image/tiff"),
        ("tiff", "image/tiff"),
        ("ico", "image/vnd.microsoft.icon"),
        ("txt", "text/plain"),
        ("zip", "application/zip"),
        ("mp4", "video/mp4"),
        ("exe", "application/octet-stream"),
    ];

    /// Extensions offered by the file picker.
    pub const PICKER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "pdf"];

    /// Returns the MIME type declared for an extension (case-insensitive).
    #[must_use]
    pub fn mime_type_for_extension(ext: &str) -> &'static str {
        let ext = ext.to_ascii_lowercase();
        MIME_BY_EXTENSION
            .iter()
            .find(|(known, _)| *known == ext)
            .map_or(FALLBACK_MIME_TYPE, |(_, mime)| *mime)
    }

    /// Returns the MIME type declared for a path from its extension.
    #[must_use]
    pub fn mime_type_for_path<P: AsRef<Path>>(path: P) -> &'static str {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map_or(FALLBACK_MIME_TYPE, mime_type_for_extension)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn known_extensions_map_case_insensitively() {
            assert_eq!(mime_type_for_path("a/photo.JPG"), "image/jpeg");
            assert_eq!(mime_type_for_path("scan.pdf"), "application/pdf");
            assert_eq!(mime_type_for_path("anim.webp"), "image/webp");
        }

        #[test]
        fn unknown_or_missing_extension_falls_back() {
            assert_eq!(mime_type_for_path("malware.exe"), FALLBACK_MIME_TYPE);
            assert_eq!(mime_type_for_path("README"), FALLBACK_MIME_TYPE);
            assert_eq!(mime_type_for_path("archive.rar"), FALLBACK_MIME_TYPE);
        }

        #[test]
        fn picker_extensions_are_all_known() {
            for ext in PICKER_EXTENSIONS {
                assert_ne!(mime_type_for_extension(ext), FALLBACK_MIME_TYPE);
            }
        }
    }
}
