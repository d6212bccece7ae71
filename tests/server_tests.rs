// HTTP router tests
// Author: kelexine (https://github.com/kelexine)

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use translingua::config::AppConfig;
use translingua::error::{AppError, Result};
use translingua::models::GenerationParameters;
use translingua::server::create_router;
use translingua::translation::{TextGenerator, Translator};

struct FixedGenerator(std::result::Result<&'static str, &'static str>);

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn generate(&self, _prompt: &str, _params: &GenerationParameters) -> Result<String> {
        self.0
            .map(str::to_string)
            .map_err(|e| AppError::TranslationService(e.to_string()))
    }
}

fn app(reply: std::result::Result<&'static str, &'static str>) -> Router {
    let translator = Translator::new(Arc::new(FixedGenerator(reply)));
    create_router(AppConfig::default(), translator)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn translate_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/translate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_translate_success() {
    let response = app(Ok("Hola, ¿cómo estás?"))
        .oneshot(translate_request(json!({
            "text": "Hello, how are you?",
            "source_language": "English",
            "target_language": "Spanish"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let header_id = response
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["translated_text"], "Hola, ¿cómo estás?");
    assert_eq!(body["stats"]["source_characters"], 19);
    assert_eq!(body["stats"]["translated_characters"], 18);
    assert_eq!(body["stats"]["words"], 3);
    assert_eq!(body["request_id"], header_id.as_str());
}

#[tokio::test]
async fn test_translate_keeps_caller_request_id() {
    let mut request = translate_request(json!({
        "text": "Hi",
        "source_language": "English",
        "target_language": "English"
    }));
    request
        .headers_mut()
        .insert("x-request-id", "caller-supplied-42".parse().unwrap());

    let response = app(Ok("unused")).oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "caller-supplied-42");
    let body = body_json(response).await;
    assert_eq!(body["request_id"], "caller-supplied-42");
}

#[tokio::test]
async fn test_translate_oversized_body_is_text_too_long() {
    let response = app(Ok("unused"))
        .oneshot(translate_request(json!({
            "text": "a".repeat(300_000),
            "source_language": "English",
            "target_language": "Spanish"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "failure");
    assert_eq!(body["error"]["kind"], "text_too_long");
    assert_eq!(
        body["error"]["message"],
        "Text is too long. Please limit to 30,000 characters."
    );
    assert!(body["request_id"].is_string());
}

#[tokio::test]
async fn test_translate_just_over_limit_is_text_too_long() {
    let response = app(Ok("unused"))
        .oneshot(translate_request(json!({
            "text": "a".repeat(30_001),
            "source_language": "English",
            "target_language": "Spanish"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["kind"], "text_too_long");
}

#[tokio::test]
async fn test_translate_validation_failure() {
    let response = app(Ok("unused"))
        .oneshot(translate_request(json!({
            "text": "Hi",
            "source_language": "English",
            "target_language": "English"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "failure");
    assert_eq!(body["error"]["kind"], "identical_languages");
    assert_eq!(
        body["error"]["message"],
        "Source and target languages cannot be the same."
    );
}

#[tokio::test]
async fn test_translate_missing_language_uses_sentinel() {
    let response = app(Ok("unused"))
        .oneshot(translate_request(json!({ "text": "Hi", "target_language": "French" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["kind"], "source_language_missing");
}

#[tokio::test]
async fn test_translate_service_failure() {
    let response = app(Err("Network error: connection reset"))
        .oneshot(translate_request(json!({
            "text": "Hi",
            "source_language": "English",
            "target_language": "German"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["kind"], "translation_service_error");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("connection reset"));
}

#[tokio::test]
async fn test_translate_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/translate")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(Ok("unused")).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["kind"], "invalid_request");
}

#[tokio::test]
async fn test_languages_endpoint() {
    let request = Request::builder()
        .uri("/api/languages")
        .body(Body::empty())
        .unwrap();
    let response = app(Ok("unused")).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["sentinel"], "Select Language");
    assert_eq!(body["languages"].as_array().unwrap().len(), 42);
    assert_eq!(body["languages"][0], json!({"name": "English", "code": "en"}));
    assert_eq!(body["options"].as_array().unwrap().len(), 43);
    assert_eq!(body["options"][0], "Select Language");
    assert_eq!(body["options"][1], "English");
}

#[tokio::test]
async fn test_health_without_api_key_is_unhealthy() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app(Ok("unused")).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["model"]["message"], "Model: gemini-flash-latest");
}

#[tokio::test]
async fn test_index_page() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app(Ok("unused")).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("TransLingua"));
    assert!(html.contains("/api/translate"));
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let router = app(Ok("Ciao"));
    router
        .clone()
        .oneshot(translate_request(json!({
            "text": "Hello",
            "source_language": "English",
            "target_language": "Italian"
        })))
        .await
        .unwrap();

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("translations_total"));
    assert!(text.contains("requests_total"));
}
