//! Prediction result type.

use serde::{Deserialize, Serialize};

/// Binary prediction returned to the caller.
///
/// Serializes as `{"Heart Disease": <label>}`, the wire format consumed by
/// existing clients. 0 = no disease indicated, 1 = disease indicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "Heart Disease")]
    pub label: i64,
}

impl Prediction {
    /// Create a prediction from a raw class label.
    #[must_use]
    pub fn new(label: i64) -> Self {
        Self { label }
    }
}
