// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::AppError;
use crate::models::languages::{
    is_supported, picker_options, supported_languages, Language, UNSET_LANGUAGE,
};
use crate::models::translation::{ErrorKind, TranslationRequest, TranslationResult, TranslationStats};
use crate::translation::ValidationError;
use axum::{
    extract::{rejection::StringRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

const INDEX_HTML: &str = include_str!("index.html");
const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub sentinel: &'static str,
    pub languages: Vec<Language>,
    /// Picker entries in display order, sentinel first.
    pub options: Vec<&'static str>,
}

/// Body of a successful `/api/translate` response.
#[derive(Debug, Serialize)]
pub struct TranslateSuccess {
    pub status: &'static str,
    pub translated_text: String,
    pub stats: TranslationStats,
    pub request_id: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateFailure {
    pub status: &'static str,
    pub error: FailureDetail,
    pub request_id: String,
}

#[derive(Debug, Serialize)]
pub struct FailureDetail {
    pub kind: ErrorKind,
    pub message: String,
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn languages_handler() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        sentinel: UNSET_LANGUAGE,
        languages: supported_languages().collect(),
        options: picker_options(),
    })
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    let key_check = if state.config.gemini.api_key.is_some() {
        HealthCheck {
            status: "ok".to_string(),
            message: "API key configured".to_string(),
        }
    } else {
        overall_status = HealthStatus::Unhealthy;
        HealthCheck {
            status: "error".to_string(),
            message: "API key missing".to_string(),
        }
    };
    checks.insert("api_key".to_string(), key_check);

    let model_check = HealthCheck {
        status: "ok".to_string(),
        message: format!("Model: {}", state.config.gemini.model),
    };
    checks.insert("model".to_string(), model_check);

    let config_check = HealthCheck {
        status: "ok".to_string(),
        message: format!("API base: {}", state.config.gemini.api_base_url),
    };
    checks.insert("configuration".to_string(), config_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `/api/translate`
pub async fn translate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<String, StringRejection>, // Get raw JSON as string first
) -> Result<Response, AppError> {
    // Set by the request-id layer; echoed back in the x-request-id header
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let body = match body {
        Ok(body) => body,
        // Only oversized text can push a request past the body limit
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Request {} body is over the size limit", request_id);
            let error = ValidationError::TextTooLong;
            let result = TranslationResult::Failure {
                kind: error.kind(),
                message: error.to_string(),
            };
            crate::metrics::record_translation(&result);
            return Ok(translate_response(result, "", request_id));
        }
        Err(rejection) => return Err(AppError::InvalidRequest(rejection.body_text())),
    };

    // Manually deserialize to get better error messages
    let req: TranslationRequest = serde_json::from_str(&body).map_err(|e| {
        warn!("Failed to deserialize translate request: {}", e);
        AppError::InvalidRequest(format!("JSON deserialization error: {}", e))
    })?;

    info!(
        "Received translate request {}: {} -> {}, {} chars",
        request_id,
        req.source_language,
        req.target_language,
        req.text.chars().count()
    );
    for language in [&req.source_language, &req.target_language] {
        if language != UNSET_LANGUAGE && !is_supported(language) {
            debug!("Request {} uses uncatalogued language {:?}", request_id, language);
        }
    }

    let result = state.translator.translate_request(&req).await;
    crate::metrics::record_translation(&result);

    Ok(translate_response(result, &req.text, request_id))
}

fn translate_response(result: TranslationResult, source_text: &str, request_id: String) -> Response {
    match result {
        TranslationResult::Success { translated_text } => {
            debug!("Translation {} succeeded", request_id);
            let stats = TranslationStats::compute(source_text, &translated_text);
            let body = TranslateSuccess {
                status: "success",
                translated_text,
                stats,
                request_id,
            };
            Json(body).into_response()
        }
        TranslationResult::Failure { kind, message } => {
            let status = if kind.is_validation() {
                StatusCode::BAD_REQUEST
            } else {
                warn!("Translation {} failed: {}", request_id, message);
                StatusCode::BAD_GATEWAY
            };
            let body = TranslateFailure {
                status: "failure",
                error: FailureDetail { kind, message },
                request_id,
            };
            (status, Json(body)).into_response()
        }
    }
}

pub async fn metrics_handler() -> Result<Response, AppError> {
    let body = crate::metrics::gather_metrics()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response())
}
