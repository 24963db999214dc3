// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`upload`]: Upload types ([`FileRecord`](upload::FileRecord),
//!   [`FileRegistry`](upload::FileRegistry), [`Category`](upload::Category),
//!   [`UploadTracker`](upload::UploadTracker)) and the validation gate

pub mod upload;
