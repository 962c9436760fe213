//! # Cardioserve
//!
//! A thin HTTP serving wrapper around a pre-trained heart disease
//! classifier. The service loads two artifacts at startup (the model and a
//! set of categorical-to-numeric mapping tables), normalizes incoming JSON
//! payloads into a fixed-order feature vector, and returns a binary
//! prediction.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (patient record, mapping store, prediction)
//! - `ports`: Trait definition for the classifier seam
//! - `adapters`: Concrete model implementation loaded from a JSON artifact
//! - `application`: Input normalization and the prediction use case
//! - `server`: HTTP surface (actix-web), config, error envelope

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod server;

pub use domain::{MappingStore, PatientRecord, Prediction};

/// Result type for cardioserve operations
pub type Result<T> = std::result::Result<T, ServeError>;

/// Main error type for cardioserve.
///
/// Every request-time failure funnels into this enum and is collapsed to a
/// uniform `{"error": ...}` envelope at the HTTP boundary; the variants only
/// shape the message, never the status code.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("Malformed request body: {0}")]
    Malformed(String),

    #[error("Incomplete patient record: {0}")]
    Record(#[from] domain::RecordError),

    #[error("Model inference failed: {0}")]
    Model(#[from] ports::ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
