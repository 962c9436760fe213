//! Classifier port: Trait for the opaque pre-trained model.
//!
//! The model is an external collaborator. The application only depends on
//! this seam; the concrete artifact format lives behind it in `adapters`.

/// Error raised by a classifier implementation.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The model artifact could not be loaded or failed its sanity checks.
    #[error("model artifact invalid: {0}")]
    Artifact(String),

    /// The feature vector length does not match what the model was
    /// trained on.
    #[error("feature dimension mismatch: model expects {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Trait for binary classification over a fixed-order feature vector.
///
/// Implementations are loaded once at startup and shared read-only across
/// requests, hence `Send + Sync`.
pub trait Classifier: Send + Sync {
    /// Predict the class label for a single feature vector.
    ///
    /// # Errors
    /// Returns [`ModelError::DimensionMismatch`] if `features` does not
    /// match the model's trained dimensionality.
    fn predict(&self, features: &[f64]) -> Result<i64, ModelError>;
}
