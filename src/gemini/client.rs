// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use crate::config::{ApiKey, GeminiConfig, LoggingConfig};
use crate::error::{AppError, Result};
use crate::models::gemini::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, ListModelsResponse,
    ModelInfo,
};
use crate::models::translation::GenerationParameters;
use crate::translation::TextGenerator;
use crate::utils::logging::scrub;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Prompt used by the connectivity check.
pub const CONNECTIVITY_PROMPT: &str = "Hello, can you hear me?";

/// Client for the Google Gemini generative-language API.
///
/// Authenticates with an API key and talks to two endpoints:
/// - `models/{model}:generateContent` for translations and the connectivity check
/// - `models` for listing what the key can use
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
    logging: LoggingConfig,
    api_key: ApiKey,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Fails with a configuration error when no API key is configured.
    pub fn new(config: &GeminiConfig, logging: &LoggingConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            AppError::Config("Gemini API key is not configured".to_string())
        })?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .use_rustls_tls()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created Gemini HTTP client for {}", config.api_base_url);

        Ok(Self {
            http_client,
            config: config.clone(),
            logging: logging.clone(),
            api_key,
        })
    }

    /// Model used for translations.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!(
            "{}/models/{}:{}",
            self.config.api_base_url.trim_end_matches('/'),
            model,
            method
        )
    }

    /// Call Gemini `generateContent` API.
    ///
    /// Exactly one HTTP request is made; failures are returned as
    /// `AppError::TranslationService` without retrying.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
        model: &str,
    ) -> Result<GenerateContentResponse> {
        let url = self.model_url(model, "generateContent");
        debug!("Calling generateContent API for model: {}", model);

        let start = Instant::now();
        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(request)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                crate::metrics::record_gemini_call(model, 0, start.elapsed().as_secs_f64());
                let message = scrub(&self.logging, &e.to_string());
                error!("Gemini API request failed: {}", message);
                return Err(AppError::TranslationService(format!(
                    "Network error: {}",
                    message
                )));
            }
        };

        let status = response.status();
        crate::metrics::record_gemini_call(model, status.as_u16(), start.elapsed().as_secs_f64());

        let response_text = response.text().await.map_err(|e| {
            AppError::TranslationService(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let detail = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.clone());
            let detail = scrub(&self.logging, &detail);
            error!("Gemini API error: HTTP {} - {}", status, detail);
            return Err(AppError::TranslationService(format!(
                "HTTP {}: {}",
                status.as_u16(),
                detail
            )));
        }

        debug!(
            "Raw Gemini response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>()
        );

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            AppError::TranslationService(format!("Response parsing error: {}", e))
        })
    }

    /// List models available to the configured key, following pagination.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = format!("{}/models", self.config.api_base_url.trim_end_matches('/'));
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .http_client
                .get(&url)
                .header(API_KEY_HEADER, self.api_key.expose());
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await.map_err(|e| {
                AppError::TranslationService(format!(
                    "Network error: {}",
                    scrub(&self.logging, &e.to_string())
                ))
            })?;

            let status = response.status();
            let body = response.text().await.map_err(|e| {
                AppError::TranslationService(format!("Failed to read response body: {}", e))
            })?;
            if !status.is_success() {
                let detail = Self::extract_error_message(&body).unwrap_or(body);
                return Err(AppError::TranslationService(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    scrub(&self.logging, &detail)
                )));
            }

            let page: ListModelsResponse = serde_json::from_str(&body)?;
            models.extend(page.models);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!("Listed {} models", models.len());
        Ok(models)
    }

    /// Check connectivity to Gemini API.
    ///
    /// Sends a short prompt to the configured model and returns the
    /// round-trip latency together with the model's reply.
    pub async fn check_connectivity(&self) -> Result<(Duration, String)> {
        let start = Instant::now();
        let request = GenerateContentRequest::from_prompt(CONNECTIVITY_PROMPT, None);
        let response = self.generate_content(&request, &self.config.model).await?;
        let latency = start.elapsed();

        let reply = response.text().unwrap_or_default();
        info!("API connectivity check passed in {:?}", latency);
        Ok((latency, reply))
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            if let Some(error) = error_resp.error {
                return error.message.or(error.status);
            }
        }
        None
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, params: &GenerationParameters) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt, Some(GenerationConfig::from(params)));
        let response = self.generate_content(&request, &self.config.model).await?;

        if let Some(reason) = response.block_reason() {
            return Err(AppError::TranslationService(format!(
                "The request was blocked by the service ({})",
                reason
            )));
        }

        // Truncation at max_output_tokens is passed through as-is
        if response.finish_reason() == Some("MAX_TOKENS") {
            debug!("Gemini response hit the output token limit");
        }

        Ok(response.text().unwrap_or_default())
    }
}
