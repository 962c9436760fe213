//! Cardioserve entry point.
//!
//! Loads the model and mapping artifacts, then serves predictions over
//! HTTP. Artifact loading is fatal on failure: the process refuses to start
//! serving without both artifacts.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cardioserve::adapters::LogisticModel;
use cardioserve::application::PredictionService;
use cardioserve::domain::MappingStore;
use cardioserve::server::{self, Config};

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let model = LogisticModel::load(&config.model_path)?;
    let mappings = MappingStore::load(&config.mappings_path)?;

    let service = PredictionService::new(Arc::new(model), Arc::new(mappings));

    server::serve(&config, service).await?;
    Ok(())
}
