//! Types for content conversion progress and results

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::schema::{self, Schema};

/// Progress callback type for batch conversion
pub type ConvertProgressCallback<'a> = &'a dyn Fn(&ConvertProgress);

/// Progress information during batch conversion
#[derive(Debug, Clone)]
pub struct ConvertProgress {
    /// Current operation phase
    pub phase: ConvertPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current file being processed (if applicable)
    pub current_file: Option<String>,
}

impl ConvertProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file name
    #[must_use]
    pub fn with_file(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Phase of batch conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// Listing source records
    Scanning,
    /// Mapping and writing resources
    Converting,
    /// Operation complete
    Complete,
}

impl ConvertPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scanning => "Scanning content",
            Self::Converting => "Converting",
            Self::Complete => "Complete",
        }
    }
}

/// Options for batch conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Category keys (`photon_arts`) or source directory names
    /// (`photon-arts`) to convert. Empty converts every category.
    pub categories: Vec<String>,
}

impl ConvertOptions {
    /// Convert only the given categories
    #[must_use]
    pub fn only<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Schemas selected by these options, in conversion order
    ///
    /// # Errors
    /// Returns [`Error::UnknownCategory`] for a key that names no category.
    pub fn selected_schemas(&self) -> Result<Vec<&'static Schema>> {
        for key in &self.categories {
            if schema::find(key).is_none() {
                return Err(Error::UnknownCategory(key.clone()));
            }
        }

        Ok(schema::ALL
            .iter()
            .copied()
            .filter(|s| {
                self.categories.is_empty()
                    || self
                        .categories
                        .iter()
                        .any(|key| schema::find(key).is_some_and(|found| found.name == s.name))
            })
            .collect())
    }
}

/// Result of converting one category
#[derive(Debug, Clone)]
pub struct CategoryResult {
    /// Category key
    pub category: &'static str,
    /// Display label
    pub label: &'static str,
    /// Whether the source directory exists
    pub source_found: bool,
    /// Number of records written
    pub success_count: usize,
    /// Number of records that failed
    pub fail_count: usize,
    /// Paths of the written `.tres` files
    pub written: Vec<PathBuf>,
    /// One message per failed record
    pub failures: Vec<String>,
}

impl CategoryResult {
    #[must_use]
    pub fn new(schema: &Schema) -> Self {
        Self {
            category: schema.name,
            label: schema.label,
            source_found: false,
            success_count: 0,
            fail_count: 0,
            written: Vec::new(),
            failures: Vec::new(),
        }
    }
}

/// Result of a full conversion run
#[derive(Debug, Clone, Default)]
pub struct ConvertSummary {
    /// Per-category results, in conversion order
    pub categories: Vec<CategoryResult>,
}

impl ConvertSummary {
    /// Total number of resources written
    #[must_use]
    pub fn total_success(&self) -> usize {
        self.categories.iter().map(|c| c.success_count).sum()
    }

    /// Total number of failed records
    #[must_use]
    pub fn total_failed(&self) -> usize {
        self.categories.iter().map(|c| c.fail_count).sum()
    }
}
