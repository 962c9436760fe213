//! Domain layer: Core types for the prediction pipeline.
//!
//! This module contains pure types with no HTTP or filesystem concerns,
//! except for the mapping store's artifact loader which is a one-shot
//! startup operation.

mod mappings;
mod prediction;
mod record;

pub use mappings::{MappingStore, MappingTable, UNKNOWN_CATEGORY};
pub use prediction::Prediction;
pub use record::{default_for, PatientRecord, RecordError, FEATURE_COUNT, FEATURE_ORDER};
