// SPDX-License-Identifier: MPL-2.0
//! Gallery category filter.
//!
//! Pure filter types without I/O, in the same spirit as the other domain
//! value objects.

use super::record::FileKind;

/// Category selected in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Category {
    /// Every record.
    #[default]
    All,
    /// Records with [`FileKind::Image`].
    Images,
    /// Records with [`FileKind::Document`].
    Documents,
    /// Records with [`FileKind::Other`].
    Other,
}

impl Category {
    /// All categories in the order the gallery shows them.
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Images,
        Category::Documents,
        Category::Other,
    ];

    /// Returns `true` if this category includes the given kind.
    #[must_use]
    pub fn matches_kind(&self, kind: FileKind) -> bool {
        match self {
            Self::All => true,
            Self::Images => kind == FileKind::Image,
            Self::Documents => kind == FileKind::Document,
            Self::Other => kind == FileKind::Other,
        }
    }

    /// i18n key of the category button label.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::All => "category-all",
            Self::Images => "category-images",
            Self::Documents => "category-documents",
            Self::Other => "category-other",
        }
    }
}

/// Per-category record counts, computed in one pass over the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    pub images: usize,
    pub documents: usize,
    pub other: usize,
}

impl CategoryCounts {
    /// Tallies one record of the given kind.
    pub fn record(&mut self, kind: FileKind) {
        match kind {
            FileKind::Image => self.images += 1,
            FileKind::Document => self.documents += 1,
            FileKind::Other => self.other += 1,
        }
    }

    /// Total number of records.
    #[must_use]
    pub fn total(&self) -> usize {
        self.images + self.documents + self.other
    }

    /// Count for a category button.
    #[must_use]
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::All => self.total(),
            Category::Images => self.images,
            Category::Documents => self.documents,
            Category::Other => self.other,
        }
    }
}
