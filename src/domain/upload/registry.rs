// SPDX-License-Identifier: MPL-2.0
//! In-memory registry of uploaded files.
//!
//! The registry is the single source of truth for the gallery. It keeps
//! records in arrival order and only shrinks on explicit user deletion.
//! Nothing here survives the process.

use super::filter::{Category, CategoryCounts};
use super::record::{FileRecord, RecordId};

/// Ordered collection of [`FileRecord`]s with unique ids.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    records: Vec<FileRecord>,
}

impl FileRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends records after the existing ones, keeping their order.
    ///
    /// A record whose id is already present is skipped so ids stay unique.
    /// Returns the number of records actually added.
    pub fn append(&mut self, records: impl IntoIterator<Item = FileRecord>) -> usize {
        let mut added = 0;
        for record in records {
            if self.contains(&record.id) {
                continue;
            }
            self.records.push(record);
            added += 1;
        }
        added
    }

    /// Removes the record with the given id.
    ///
    /// Returns the removed record, or `None` (and leaves the registry
    /// untouched) when the id is unknown.
    pub fn remove(&mut self, id: &RecordId) -> Option<FileRecord> {
        let pos = self.records.iter().position(|r| &r.id == id)?;
        Some(self.records.remove(pos))
    }

    /// Returns the records matching the category, in registry order.
    #[must_use]
    pub fn filter(&self, category: Category) -> Vec<&FileRecord> {
        self.records
            .iter()
            .filter(|r| category.matches_kind(r.kind))
            .collect()
    }

    /// Counts records per category in a single pass.
    #[must_use]
    pub fn counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for record in &self.records {
            counts.record(record.kind);
        }
        counts
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&FileRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.records.iter().any(|r| &r.id == id)
    }

    /// All records in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
