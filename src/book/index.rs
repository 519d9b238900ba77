use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::entry::PriceBookEntry;

#[derive(Error, Debug)]
pub enum PriceBookError {
    #[error("Failed to read price book: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse price book: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A duplicate model number found while building the index.
///
/// Informational only: the first-encountered entry stays authoritative and
/// the engine's correctness is unaffected, but callers should surface these
/// for data-quality review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateModel {
    pub model_number: String,
    /// Source row of the entry that was kept
    pub kept_row: Option<u32>,
    /// Source row of the entry that was skipped
    pub skipped_row: Option<u32>,
}

/// A named price-book snapshot as supplied by the persistence collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBookSnapshot {
    pub name: String,
    pub entries: Vec<PriceBookEntry>,
}

impl PriceBookSnapshot {
    /// Parse a snapshot from a JSON object `{name, entries}`
    pub fn from_json(json: &str) -> Result<Self, PriceBookError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, PriceBookError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    #[must_use]
    pub fn into_index(self) -> PriceBookIndex {
        PriceBookIndex::build(self.entries)
    }
}

/// Deduplicated lookup structure over one price-book snapshot.
///
/// Holds the primary model-number map plus a secondary map from
/// dash-stripped model strings to their canonical dashed form, used only by
/// the dash-removal matching stage. Both maps are built once and never
/// mutated afterwards. Model iteration order is ingestion order, which keeps
/// candidate scans and reports deterministic.
#[derive(Debug, Default)]
pub struct PriceBookIndex {
    /// model_number -> entry, insertion-ordered, first entry wins
    entries: IndexMap<String, PriceBookEntry>,

    /// dash-stripped model -> canonical dashed model, first entry wins
    dedashed: HashMap<String, String>,

    /// Duplicate model numbers skipped during the build
    warnings: Vec<DuplicateModel>,
}

impl PriceBookIndex {
    /// Build an index from raw entries in ingestion order.
    ///
    /// Never fails: duplicates become warnings and an empty entry list
    /// yields an empty index (every PO line will reconcile to
    /// `ModelNotFound`).
    #[must_use]
    pub fn build(raw_entries: Vec<PriceBookEntry>) -> Self {
        let mut entries: IndexMap<String, PriceBookEntry> =
            IndexMap::with_capacity(raw_entries.len());
        let mut dedashed: HashMap<String, String> = HashMap::with_capacity(raw_entries.len());
        let mut warnings = Vec::new();

        for entry in raw_entries {
            if let Some(existing) = entries.get(&entry.model_number) {
                tracing::warn!(
                    model = %entry.model_number,
                    kept_row = ?existing.source_row,
                    skipped_row = ?entry.source_row,
                    "duplicate model number in price book, keeping first entry"
                );
                warnings.push(DuplicateModel {
                    model_number: entry.model_number.clone(),
                    kept_row: existing.source_row,
                    skipped_row: entry.source_row,
                });
                continue;
            }

            let stripped = strip_dashes(&entry.model_number);
            dedashed
                .entry(stripped)
                .or_insert_with(|| entry.model_number.clone());
            entries.insert(entry.model_number.clone(), entry);
        }

        Self {
            entries,
            dedashed,
            warnings,
        }
    }

    /// Parse a JSON array of raw entries and build the index
    pub fn from_json(json: &str) -> Result<Self, PriceBookError> {
        let raw_entries: Vec<PriceBookEntry> = serde_json::from_str(json)?;
        Ok(Self::build(raw_entries))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, PriceBookError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn get(&self, model_number: &str) -> Option<&PriceBookEntry> {
        self.entries.get(model_number)
    }

    #[must_use]
    pub fn contains(&self, model_number: &str) -> bool {
        self.entries.contains_key(model_number)
    }

    /// Model numbers in ingestion order
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Canonical dashed model for a dash-stripped lookup string
    pub fn canonical_for_dedashed(&self, stripped: &str) -> Option<&str> {
        self.dedashed.get(stripped).map(String::as_str)
    }

    /// Duplicate-model warnings recorded during the build
    #[must_use]
    pub fn warnings(&self) -> &[DuplicateModel] {
        &self.warnings
    }

    /// Number of distinct models in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Remove every dash from a model string
#[must_use]
pub fn strip_dashes(model: &str) -> String {
    model.replace('-', "")
}
