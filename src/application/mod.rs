//! Application layer: Use cases orchestrating domain and ports.

mod normalize;
mod predict;

pub use normalize::normalize;
pub use predict::PredictionService;
