// SPDX-License-Identifier: MPL-2.0
//! Upload domain types.
//!
//! Records, the in-memory registry, the validation gate and batch
//! bookkeeping. Nothing here performs I/O.

pub mod batch;
pub mod filter;
pub mod record;
pub mod registry;
pub mod validation;

// Re-export commonly used types
pub use batch::{BatchId, BatchOutcome, FailureKind, UploadBatch, UploadFailure, UploadTracker};
pub use filter::{Category, CategoryCounts};
pub use record::{FileKind, FileRecord, RecordId};
pub use registry::FileRegistry;
pub use validation::{Candidate, Rejection, RejectionReason, MAX_FILE_SIZE_BYTES};
