// Translation pipeline: validate → build prompt → one generation call
// Author: kelexine (https://github.com/kelexine)

use super::{build_prompt, validate};
use crate::error::{AppError, Result};
use crate::models::translation::{
    ErrorKind, GenerationParameters, TranslationRequest, TranslationResult,
};
use async_trait::async_trait;
use std::sync::Arc;

/// A text-generation backend.
///
/// Implementations return the raw generated text (possibly empty) or an
/// `AppError::TranslationService` describing why the call failed.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, params: &GenerationParameters) -> Result<String>;
}

/// Runs translation requests against a [`TextGenerator`].
///
/// Holds no per-call state; one instance can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct Translator {
    generator: Arc<dyn TextGenerator>,
    params: GenerationParameters,
}

impl Translator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            params: GenerationParameters::TRANSLATION,
        }
    }

    /// Translate `text` and fold every failure into a [`TranslationResult`].
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> TranslationResult {
        match self
            .try_translate(text, source_language, target_language)
            .await
        {
            Ok(translated_text) => TranslationResult::Success { translated_text },
            Err(e) => TranslationResult::Failure {
                kind: e.kind(),
                message: e.user_message(),
            },
        }
    }

    pub async fn translate_request(&self, request: &TranslationRequest) -> TranslationResult {
        self.translate(
            &request.text,
            &request.source_language,
            &request.target_language,
        )
        .await
    }

    /// Same pipeline as [`Translator::translate`], as a `Result`.
    pub async fn try_translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        validate(text, source_language, target_language)?;

        let prompt = build_prompt(text, source_language, target_language);
        let generated = self
            .generator
            .generate(&prompt, &self.params)
            .await
            .map_err(into_service_error)?;

        if generated.is_empty() {
            return Err(AppError::TranslationService(
                "Translation failed: the service returned an empty response.".to_string(),
            ));
        }

        Ok(generated.trim().to_string())
    }
}

// Anything the generator reports is a service failure from the caller's view
fn into_service_error(e: AppError) -> AppError {
    match e.kind() {
        ErrorKind::TranslationServiceError => match e {
            AppError::TranslationService(_) => e,
            other => AppError::TranslationService(other.to_string()),
        },
        _ => AppError::TranslationService(e.user_message()),
    }
}
