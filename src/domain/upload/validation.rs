// SPDX-License-Identifier: MPL-2.0
//! Pre-upload validation gate.
//!
//! Decides from a file's declared MIME type and size whether it may be sent
//! to the hosting service. The allow-list is exact: new types are added as
//! entries, never matched by wildcard.

use std::fmt;

/// MIME types accepted for upload.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/webp",
    "application/pdf",
];

/// Maximum accepted size per file (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// What the gate needs to know about a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl Candidate {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

/// Why a file was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Declared type is not in [`ALLOWED_MIME_TYPES`].
    UnsupportedType { mime_type: String },
    /// File is larger than the limit.
    TooLarge { size_bytes: u64, limit_bytes: u64 },
}

impl RejectionReason {
    /// i18n key describing the reason.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::UnsupportedType { .. } => "validation-unsupported-type",
            Self::TooLarge { .. } => "validation-too-large",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType { mime_type } => {
                write!(f, "unsupported file type ({mime_type})")
            }
            Self::TooLarge {
                size_bytes,
                limit_bytes,
            } => write!(
                f,
                "file too large ({size_bytes} bytes, limit {limit_bytes} bytes)"
            ),
        }
    }
}

/// A refused file and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub file_name: String,
    pub reason: RejectionReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file_name, self.reason)
    }
}

/// Returns `true` if the MIME type is on the allow-list (case-insensitive,
/// parameters such as `; charset=` ignored).
#[must_use]
pub fn is_allowed_mime_type(mime_type: &str) -> bool {
    let essence = mime_type.split(';').next().unwrap_or("").trim();
    ALLOWED_MIME_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(essence))
}

/// Checks one file. Type is checked before size.
///
/// # Errors
///
/// Returns the [`Rejection`] describing the first failed check.
pub fn validate(candidate: &Candidate) -> Result<(), Rejection> {
    if !is_allowed_mime_type(&candidate.mime_type) {
        return Err(Rejection {
            file_name: candidate.file_name.clone(),
            reason: RejectionReason::UnsupportedType {
                mime_type: candidate.mime_type.clone(),
            },
        });
    }
    if candidate.size_bytes > MAX_FILE_SIZE_BYTES {
        return Err(Rejection {
            file_name: candidate.file_name.clone(),
            reason: RejectionReason::TooLarge {
                size_bytes: candidate.size_bytes,
                limit_bytes: MAX_FILE_SIZE_BYTES,
            },
        });
    }
    Ok(())
}

/// Splits a batch into accepted items and rejections, keeping input order.
///
/// The projection lets callers carry richer items (paths, bytes) through the
/// gate without cloning them into a [`Candidate`] first.
pub fn partition<T, F>(items: Vec<T>, candidate_of: F) -> (Vec<T>, Vec<Rejection>)
where
    F: Fn(&T) -> Candidate,
{
    let mut accepted = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();
    for item in items {
        match validate(&candidate_of(&item)) {
            Ok(()) => accepted.push(item),
            Err(rejection) => rejected.push(rejection),
        }
    }
    (accepted, rejected)
}

/// Joins the rejections of one batch into a single message, one line each.
#[must_use]
pub fn summarize(rejections: &[Rejection]) -> String {
    rejections
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
