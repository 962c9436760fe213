//! Logistic regression classifier loaded from a JSON artifact.
//!
//! The artifact is exported by the training pipeline and matches the
//! structure below. The serving side never trains or recalibrates; it only
//! evaluates the linear form and thresholds the sigmoid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ports::{Classifier, ModelError};

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedLinearModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Pre-trained logistic regression classifier.
///
/// Decision rule: `sigmoid(w . x + b) >= 0.5 -> 1`, else 0.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    params: ExportedLinearModel,
}

impl LogisticModel {
    /// Load and sanity-check the model artifact.
    ///
    /// # Errors
    /// Returns [`ModelError::Artifact`] if the file cannot be read, does not
    /// parse, or its parameter lengths disagree. Startup aborts on failure.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Artifact(format!("failed to read {path:?}: {e}")))?;
        let params: ExportedLinearModel = serde_json::from_str(&content)
            .map_err(|e| ModelError::Artifact(format!("invalid model JSON in {path:?}: {e}")))?;
        let model = Self::from_params(params)?;
        tracing::info!(
            "Loaded model from {:?} (n_features={})",
            path,
            model.params.coefficients.len()
        );
        Ok(model)
    }

    /// Build a model from already-parsed parameters, running sanity checks.
    ///
    /// # Errors
    /// Returns [`ModelError::Artifact`] if the parameters are inconsistent.
    pub fn from_params(params: ExportedLinearModel) -> Result<Self, ModelError> {
        let n = params.feature_names.len();
        if n == 0 {
            return Err(ModelError::Artifact("model has no features".into()));
        }
        if params.coefficients.len() != n {
            return Err(ModelError::Artifact(format!(
                "coefficient count {} does not match feature_names length {n}",
                params.coefficients.len()
            )));
        }
        Ok(Self { params })
    }

    /// Number of features the model expects.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.params.coefficients.len()
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<i64, ModelError> {
        if features.len() != self.dimension() {
            return Err(ModelError::DimensionMismatch {
                expected: self.dimension(),
                got: features.len(),
            });
        }

        let z: f64 = self
            .params
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.params.intercept;

        let probability = sigmoid(z);
        Ok(i64::from(probability >= 0.5))
    }
}
