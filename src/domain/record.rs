//! Patient record and feature vector assembly.
//!
//! Field names, defaults, and the feature order are an external contract
//! with the trained model artifact: the model was fitted on columns in
//! exactly this order, and nothing about the artifact self-describes it.

use std::collections::BTreeMap;

use serde_json::Value;

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 13;

/// Recognized fields in the order the model was trained on.
///
/// Order is load-bearing. Do not reorder without retraining the model.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = [
    "Age",
    "BMI Category",
    "Occupation",
    "Gender",
    "Systolic",
    "Diastolic",
    "Heart Rate",
    "Stress Level",
    "Feature1",
    "Feature2",
    "Feature3",
    "Feature4",
    "Feature5",
];

/// Default value for each recognized field when absent from the request.
///
/// Categorical fields default to the -1 sentinel ("absent or unrecognized
/// category"); vitals default to textbook resting values; the placeholder
/// features default to 0.
pub fn default_for(field: &str) -> Option<i64> {
    match field {
        "Age" => Some(0),
        "BMI Category" | "Occupation" | "Gender" => Some(-1),
        "Systolic" => Some(120),
        "Diastolic" => Some(80),
        "Heart Rate" => Some(70),
        "Stress Level" => Some(5),
        "Feature1" | "Feature2" | "Feature3" | "Feature4" | "Feature5" => Some(0),
        _ => None,
    }
}

/// Error raised while assembling the feature vector from a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A recognized field is missing after normalization. Normalization
    /// guarantees every recognized field is populated, so this is a
    /// contract violation and fails closed rather than defaulting twice.
    #[error("field '{0}' missing from normalized record")]
    MissingField(&'static str),

    /// A field holds a value that cannot be read as a number. Normalization
    /// deliberately passes numeric fields through unvalidated; the failure
    /// surfaces here, at inference time.
    #[error("field '{field}' is not numeric (got {found})")]
    NotNumeric { field: &'static str, found: String },
}

/// A fully-populated patient record produced by the input normalizer.
///
/// Every recognized field is present; categorical fields hold their mapped
/// integer codes. Numeric fields may still hold arbitrary JSON values, which
/// only fail once [`PatientRecord::feature_vector`] converts them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientRecord {
    values: BTreeMap<&'static str, Value>,
}

impl PatientRecord {
    /// Create an empty record. Only the normalizer should populate one.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a recognized field.
    pub fn set(&mut self, field: &'static str, value: Value) {
        self.values.insert(field, value);
    }

    /// Whether the record already holds a value for `field`.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Get a field's value, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Assemble the fixed-order feature vector for model inference.
    ///
    /// # Errors
    /// Returns [`RecordError::MissingField`] if a recognized field was never
    /// populated, and [`RecordError::NotNumeric`] if a value cannot be
    /// converted to `f64`.
    pub fn feature_vector(&self) -> Result<Vec<f64>, RecordError> {
        let mut features = Vec::with_capacity(FEATURE_COUNT);
        for field in FEATURE_ORDER {
            let value = self
                .values
                .get(field)
                .ok_or(RecordError::MissingField(field))?;
            let number = value.as_f64().ok_or_else(|| RecordError::NotNumeric {
                field,
                found: value.to_string(),
            })?;
            features.push(number);
        }
        Ok(features)
    }
}
