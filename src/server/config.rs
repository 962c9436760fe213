//! Environment-derived configuration.

use std::path::PathBuf;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Path to the trained model artifact (JSON).
    pub model_path: PathBuf,
    /// Path to the categorical mapping tables artifact (JSON).
    pub mappings_path: PathBuf,
}

impl Config {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// - `CARDIOSERVE_HOST` (default `127.0.0.1`)
    /// - `CARDIOSERVE_PORT` (default `8080`)
    /// - `CARDIOSERVE_MODEL_PATH` (default `models/heart_model.json`)
    /// - `CARDIOSERVE_MAPPINGS_PATH` (default `models/heart_mappings.json`)
    #[must_use]
    pub fn from_env() -> Self {
        let host =
            std::env::var("CARDIOSERVE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("CARDIOSERVE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let model_path = std::env::var("CARDIOSERVE_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models/heart_model.json"));
        let mappings_path = std::env::var("CARDIOSERVE_MAPPINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models/heart_mappings.json"));

        Self {
            host,
            port,
            model_path,
            mappings_path,
        }
    }
}
