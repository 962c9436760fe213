//! HTTP surface: actix-web application, config, and the error envelope.
//!
//! Cross-origin requests are permitted for all origins; the service is
//! expected to sit behind whatever perimeter the deployment provides.

mod config;
mod routes;

pub use config::Config;
pub use routes::{home, predict};

use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer, ResponseError};

use crate::application::PredictionService;
use crate::ports::Classifier;
use crate::ServeError;

/// Collapse every in-handler failure to the uniform envelope.
///
/// The external contract is deliberately crude: one status code, one
/// free-text message, no structured error kinds, never a partial result.
impl ResponseError for ServeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!("Request failed: {}", self);
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

/// Run the HTTP server until shutdown.
///
/// The prediction service is wrapped in `web::Data` once and shared
/// read-only across all workers.
///
/// # Errors
/// Returns error if the listen address cannot be bound.
pub async fn serve<C: Classifier + 'static>(
    config: &Config,
    service: PredictionService<C>,
) -> std::io::Result<()> {
    let service = web::Data::new(service);

    tracing::info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(service.clone())
            .route("/", web::get().to(home))
            .route("/predict", web::post().to(predict::<C>))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
