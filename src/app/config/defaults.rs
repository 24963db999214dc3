// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Upload**: Hosting endpoint, target folder and concurrency
//! - **Gallery**: Thumbnail cache and card layout
//! - **Notifications**: Toast lifetimes

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Production API host of the hosting service.
pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudinary.com";

/// Folder uploads are filed under.
pub const DEFAULT_UPLOAD_FOLDER: &str = "file-uploads";

/// Default number of upload requests in flight at once.
pub const DEFAULT_MAX_CONCURRENT_UPLOADS: usize = 4;

/// Minimum number of concurrent uploads.
pub const MIN_CONCURRENT_UPLOADS: usize = 1;

/// Maximum number of concurrent uploads.
pub const MAX_CONCURRENT_UPLOADS: usize = 16;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of decoded thumbnails kept in memory.
pub const THUMBNAIL_CACHE_CAPACITY: usize = 128;

/// Width of a grid card in logical pixels.
pub const GRID_CARD_WIDTH: f32 = 220.0;

/// Height of the thumbnail area of a grid card.
pub const GRID_THUMBNAIL_HEIGHT: f32 = 124.0;

/// Size of the thumbnail in list rows.
pub const LIST_THUMBNAIL_SIZE: f32 = 48.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifetime of success and info toasts (seconds).
pub const TOAST_SHORT_SECS: u64 = 3;

/// Lifetime of warning toasts (seconds).
pub const TOAST_LONG_SECS: u64 = 6;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_CONCURRENT_UPLOADS > 0);
    assert!(MAX_CONCURRENT_UPLOADS >= MIN_CONCURRENT_UPLOADS);
    assert!(DEFAULT_MAX_CONCURRENT_UPLOADS >= MIN_CONCURRENT_UPLOADS);
    assert!(DEFAULT_MAX_CONCURRENT_UPLOADS <= MAX_CONCURRENT_UPLOADS);

    assert!(THUMBNAIL_CACHE_CAPACITY > 0);
    assert!(GRID_CARD_WIDTH > GRID_THUMBNAIL_HEIGHT);

    assert!(TOAST_LONG_SECS > TOAST_SHORT_SECS);
};
