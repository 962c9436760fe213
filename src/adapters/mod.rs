//! Adapters layer: Concrete implementations of ports.
//!
//! - `model`: logistic regression classifier loaded from the JSON artifact
//!   exported by the training pipeline.

pub mod model;

pub use model::LogisticModel;
