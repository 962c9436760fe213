//! Read-only categorical-to-numeric mapping tables.
//!
//! One table per categorical field, loaded once at startup from a JSON
//! artifact produced by the training pipeline, never mutated afterwards.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

/// Code returned for a label that is absent from its table.
pub const UNKNOWN_CATEGORY: i64 = -1;

/// The categorical mapping tables keyed by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingTable {
    Bmi,
    Occupation,
    Gender,
}

/// Process-wide lookup tables mapping categorical labels to integer codes.
///
/// Field names match the JSON structure exported by the training pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingStore {
    bmi_mapping: HashMap<String, i64>,
    occupation_mapping: HashMap<String, i64>,
    gender_mapping: HashMap<String, i64>,
}

impl MappingStore {
    /// Load the mapping tables from a JSON artifact.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not match the
    /// expected structure. Startup aborts on failure; there is no fallback.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&content)?;
        tracing::info!(
            "Loaded mapping tables from {:?} (bmi={}, occupation={}, gender={})",
            path,
            store.bmi_mapping.len(),
            store.occupation_mapping.len(),
            store.gender_mapping.len(),
        );
        Ok(store)
    }

    /// Look up a categorical label, returning [`UNKNOWN_CATEGORY`] when the
    /// label is absent. Unknown labels are a sentinel case, not an error.
    #[must_use]
    pub fn lookup(&self, table: MappingTable, key: &str) -> i64 {
        let table = match table {
            MappingTable::Bmi => &self.bmi_mapping,
            MappingTable::Occupation => &self.occupation_mapping,
            MappingTable::Gender => &self.gender_mapping,
        };
        table.get(key).copied().unwrap_or(UNKNOWN_CATEGORY)
    }
}
