//! Input normalizer: raw request payload to fully-populated patient record.
//!
//! Pure function over the payload and the mapping store. Produces a record
//! in which every recognized field is present: categorical fields carry
//! their mapped integer codes, missing fields carry their defaults, and
//! unrecognized input fields are dropped.

use serde_json::{json, Map, Value};

use crate::domain::{
    default_for, MappingStore, MappingTable, PatientRecord, UNKNOWN_CATEGORY, FEATURE_ORDER,
};

/// Categorical fields and the table each resolves against.
const CATEGORICAL_FIELDS: [(&str, MappingTable); 3] = [
    ("BMI Category", MappingTable::Bmi),
    ("Occupation", MappingTable::Occupation),
    ("Gender", MappingTable::Gender),
];

fn table_for(field: &str) -> Option<MappingTable> {
    CATEGORICAL_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, table)| *table)
}

/// Normalize a raw JSON payload into a fully-populated [`PatientRecord`].
///
/// - Categorical fields present in the input are replaced by their mapped
///   codes; unmapped or non-string values become the -1 sentinel. Absence
///   and an unknown label are deliberately conflated into that one sentinel.
/// - Every recognized field still missing afterwards gets its default.
/// - Numeric fields are copied through without type validation; a bad value
///   only fails later, at feature-vector assembly.
#[must_use]
pub fn normalize(raw: &Map<String, Value>, mappings: &MappingStore) -> PatientRecord {
    let mut record = PatientRecord::new();

    for field in FEATURE_ORDER {
        match (raw.get(field), table_for(field)) {
            (Some(value), Some(table)) => {
                let code = value
                    .as_str()
                    .map_or(UNKNOWN_CATEGORY, |label| mappings.lookup(table, label));
                record.set(field, json!(code));
            }
            (Some(value), None) => record.set(field, value.clone()),
            (None, _) => {
                // default_for covers every name in FEATURE_ORDER
                if let Some(default) = default_for(field) {
                    record.set(field, json!(default));
                }
            }
        }
    }

    record
}
