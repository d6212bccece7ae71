// Error types for TransLingua
// Author: kelexine (https://github.com/kelexine)

use crate::models::translation::ErrorKind;
use crate::translation::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Translation service error: {0}")]
    TranslationService(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Failure kind reported to callers of the translation pipeline.
    ///
    /// Everything that is not a local validation failure collapses into
    /// `TranslationServiceError`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(v) => v.kind(),
            _ => ErrorKind::TranslationServiceError,
        }
    }

    /// Human-readable message without the variant prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(v) => v.to_string(),
            AppError::TranslationService(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::TranslationService(_) | AppError::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert AppError to HTTP responses for Axum
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = match &self {
            AppError::InvalidRequest(_) => "invalid_request".to_string(),
            AppError::Config(_) | AppError::ConfigParsing(_) => "configuration_error".to_string(),
            AppError::Io(_) | AppError::Json(_) | AppError::Internal(_) => {
                "internal_error".to_string()
            }
            other => other.kind().to_string(),
        };

        let body = json!({
            "status": "failure",
            "error": {
                "kind": kind,
                "message": self.user_message(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
