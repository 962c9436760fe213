//! Prediction service: Orchestrates the request pipeline.
//!
//! Normalize the payload, assemble the fixed-order feature vector, invoke
//! the classifier. Each stage returns an explicit `Result`; failures are
//! collapsed into the uniform error envelope only at the HTTP boundary.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::application::normalize;
use crate::domain::{MappingStore, Prediction};
use crate::ports::Classifier;
use crate::ServeError;

/// Service for serving predictions over a pre-trained classifier.
///
/// Both the model and the mapping store are built once at startup and
/// shared read-only across requests; the service holds them behind `Arc`
/// and keeps no per-request state.
pub struct PredictionService<C: Classifier> {
    model: Arc<C>,
    mappings: Arc<MappingStore>,
}

impl<C: Classifier> PredictionService<C> {
    /// Create a new prediction service.
    pub fn new(model: Arc<C>, mappings: Arc<MappingStore>) -> Self {
        Self { model, mappings }
    }

    /// Run the full pipeline for one request payload.
    ///
    /// # Errors
    /// Returns error if the normalized record cannot be assembled into a
    /// feature vector or if inference fails.
    pub fn predict(&self, raw: &Map<String, Value>) -> Result<Prediction, ServeError> {
        let record = normalize(raw, &self.mappings);
        let features = record.feature_vector()?;

        tracing::debug!("Assembled feature vector: {:?}", features);

        let label = self.model.predict(&features)?;

        tracing::info!("Prediction complete: label={}", label);
        Ok(Prediction::new(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ModelError;
    use std::sync::Mutex;

    /// Stub classifier that records the vector it was called with.
    struct Recording {
        label: i64,
        seen: Mutex<Vec<Vec<f64>>>,
    }

    impl Recording {
        fn new(label: i64) -> Self {
            Self {
                label,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Classifier for Recording {
        fn predict(&self, features: &[f64]) -> Result<i64, ModelError> {
            self.seen.lock().expect("Lock poisoned").push(features.to_vec());
            Ok(self.label)
        }
    }

    fn mappings() -> Arc<MappingStore> {
        Arc::new(
            serde_json::from_str(
                r#"{
                    "bmi_mapping": {"Normal": 0, "Obese": 1},
                    "occupation_mapping": {"Doctor": 0},
                    "gender_mapping": {"Female": 0, "Male": 1}
                }"#,
            )
            .expect("Mappings should parse"),
        )
    }

    fn payload(body: &str) -> Map<String, Value> {
        serde_json::from_str(body).expect("Payload should parse")
    }

    #[test]
    fn test_empty_payload_reaches_model_as_defaults() {
        let model = Arc::new(Recording::new(1));
        let service = PredictionService::new(model.clone(), mappings());

        let prediction = service.predict(&payload("{}")).expect("Should predict");
        assert_eq!(prediction, Prediction::new(1));

        let seen = model.seen.lock().expect("Lock poisoned");
        assert_eq!(
            *seen,
            vec![vec![
                0.0, -1.0, -1.0, -1.0, 120.0, 80.0, 70.0, 5.0, 0.0, 0.0, 0.0, 0.0, 0.0
            ]]
        );
    }

    #[test]
    fn test_identical_payloads_are_idempotent() {
        let service = PredictionService::new(Arc::new(Recording::new(0)), mappings());
        let body = payload(r#"{"Age": 58, "Gender": "Male", "Systolic": 144}"#);

        let first = service.predict(&body).expect("Should predict");
        let second = service.predict(&body).expect("Should predict");
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_numeric_field_surfaces_as_record_error() {
        let service = PredictionService::new(Arc::new(Recording::new(0)), mappings());

        let err = service
            .predict(&payload(r#"{"Age": "old"}"#))
            .expect_err("Must fail");
        assert!(matches!(err, ServeError::Record(_)));
    }
}
