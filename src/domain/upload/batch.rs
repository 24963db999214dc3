// SPDX-License-Identifier: MPL-2.0
//! Upload batch bookkeeping.
//!
//! One batch exists per drop/select event. The tracker implements the
//! `Idle -> Uploading -> (Success | PartialFailure | TotalFailure) -> Idle`
//! cycle: progress is reset to zero when a batch starts and again when the
//! last request of the batch resolves, whatever the outcome.

/// Identifies a batch so late results from an older batch are not counted
/// against a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchId(u64);

/// Category of a failed upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request failed or the service answered with an error.
    Transfer,
    /// Anything else (unreadable local file, task aborted).
    Unknown,
}

/// One file of a batch that produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub file_name: String,
    pub message: String,
    pub kind: FailureKind,
}

/// How a finished batch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every file was uploaded.
    Success { uploaded: usize },
    /// Some files were uploaded, some failed.
    PartialFailure {
        uploaded: usize,
        failures: Vec<UploadFailure>,
    },
    /// No file was uploaded.
    TotalFailure { failures: Vec<UploadFailure> },
}

impl BatchOutcome {
    /// Failures of the batch, empty on success.
    #[must_use]
    pub fn failures(&self) -> &[UploadFailure] {
        match self {
            Self::Success { .. } => &[],
            Self::PartialFailure { failures, .. } | Self::TotalFailure { failures } => failures,
        }
    }

    /// Number of files that produced a record.
    #[must_use]
    pub fn uploaded(&self) -> usize {
        match self {
            Self::Success { uploaded } | Self::PartialFailure { uploaded, .. } => *uploaded,
            Self::TotalFailure { .. } => 0,
        }
    }
}

/// State of the batch currently in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBatch {
    id: BatchId,
    total: usize,
    completed: usize,
    uploaded: usize,
    failures: Vec<UploadFailure>,
}

impl UploadBatch {
    #[must_use]
    pub fn id(&self) -> BatchId {
        self.id
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Completed requests as a whole percentage (`completed / total * 100`).
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = self.completed.saturating_mul(100) / self.total;
        u8::try_from(percent.min(100)).unwrap_or(100)
    }

    fn is_complete(&self) -> bool {
        self.completed >= self.total
    }

    fn into_outcome(self) -> BatchOutcome {
        if self.failures.is_empty() {
            BatchOutcome::Success {
                uploaded: self.uploaded,
            }
        } else if self.uploaded == 0 {
            BatchOutcome::TotalFailure {
                failures: self.failures,
            }
        } else {
            BatchOutcome::PartialFailure {
                uploaded: self.uploaded,
                failures: self.failures,
            }
        }
    }
}

/// Tracks the batch in flight, if any.
#[derive(Debug, Clone, Default)]
pub struct UploadTracker {
    current: Option<UploadBatch>,
    next_id: u64,
}

impl UploadTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a batch of `total` requests with progress at zero.
    ///
    /// Returns `None` (and stays idle) for an empty batch or when a batch is
    /// already in flight.
    pub fn begin(&mut self, total: usize) -> Option<BatchId> {
        if total == 0 || self.current.is_some() {
            return None;
        }
        let id = BatchId(self.next_id);
        self.next_id += 1;
        self.current = Some(UploadBatch {
            id,
            total,
            completed: 0,
            uploaded: 0,
            failures: Vec::new(),
        });
        Some(id)
    }

    /// Folds one resolved request into the current batch.
    ///
    /// Returns the outcome when this was the last request; the tracker is
    /// then idle again with progress back at zero. Results for a batch that
    /// is not current are ignored.
    pub fn record(
        &mut self,
        batch: BatchId,
        result: Result<(), UploadFailure>,
    ) -> Option<BatchOutcome> {
        let current = self.current.as_mut().filter(|b| b.id == batch)?;
        current.completed += 1;
        match result {
            Ok(()) => current.uploaded += 1,
            Err(failure) => current.failures.push(failure),
        }
        if current.is_complete() {
            self.current.take().map(UploadBatch::into_outcome)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.current.is_some()
    }

    /// Progress of the current batch, zero when idle.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.current.as_ref().map_or(0, UploadBatch::percent)
    }

    #[must_use]
    pub fn current(&self) -> Option<&UploadBatch> {
        self.current.as_ref()
    }
}
