//! Request handlers.

use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};

use crate::application::PredictionService;
use crate::ports::Classifier;
use crate::ServeError;

/// `GET /` liveness check. Static text, independent of artifact state.
pub async fn home() -> &'static str {
    "ML API is running!"
}

/// `POST /predict`: run one prediction over the request payload.
///
/// The body is parsed from raw bytes rather than through the framework's
/// JSON extractor so that malformed input flows through the same error
/// envelope as every other failure, instead of the extractor's own 400.
pub async fn predict<C: Classifier + 'static>(
    service: web::Data<PredictionService<C>>,
    body: web::Bytes,
) -> Result<HttpResponse, ServeError> {
    let raw = parse_object(&body)?;
    let prediction = service.predict(&raw)?;
    Ok(HttpResponse::Ok().json(prediction))
}

/// Parse the request body as a JSON object.
fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ServeError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ServeError::Malformed(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ServeError::Malformed(format!(
            "expected a JSON object, got: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MappingStore;
    use crate::ports::ModelError;
    use actix_web::{test, App};
    use std::sync::Arc;

    /// Stub classifier returning a fixed label.
    struct Fixed(i64);

    impl Classifier for Fixed {
        fn predict(&self, _features: &[f64]) -> Result<i64, ModelError> {
            Ok(self.0)
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

    fn service(label: i64) -> web::Data<PredictionService<Fixed>> {
        web::Data::new(PredictionService::new(Arc::new(Fixed(label)), mappings()))
    }

    macro_rules! test_app {
        ($label:expr) => {
            test::init_service(
                App::new()
                    .app_data(service($label))
                    .route("/", web::get().to(home))
                    .route("/predict", web::post().to(predict::<Fixed>)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_home_is_always_ok() {
        let app = test_app!(0);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, "ML API is running!");
    }

    #[actix_web::test]
    async fn test_predict_empty_object() {
        let app = test_app!(1);
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"Heart Disease": 1}));
    }

    #[actix_web::test]
    async fn test_predict_unknown_categorical_still_succeeds() {
        let app = test_app!(0);
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!({"BMI Category": "Unknown Value"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"Heart Disease": 0}));
    }

    #[actix_web::test]
    async fn test_predict_malformed_body_is_error_envelope() {
        let app = test_app!(0);
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_payload("this is not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some());
    }

    #[actix_web::test]
    async fn test_predict_non_object_body_is_error_envelope() {
        let app = test_app!(0);
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!([1, 2, 3]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some());
    }

    #[actix_web::test]
    async fn test_predict_non_numeric_field_is_error_envelope() {
        let app = test_app!(0);
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!({"Heart Rate": "fast"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().expect("Message").contains("Heart Rate"));
    }
}
