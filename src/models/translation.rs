// Translation pipeline value types
// Author: kelexine (https://github.com/kelexine)

use super::languages::UNSET_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum input length, counted in Unicode code points.
pub const MAX_TEXT_CHARS: usize = 30_000;

/// A single user translation request.
///
/// Missing languages deserialize as the unset sentinel so that they are
/// reported by validation rather than rejected as malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "unset_language")]
    pub source_language: String,
    #[serde(default = "unset_language")]
    pub target_language: String,
}

fn unset_language() -> String {
    UNSET_LANGUAGE.to_string()
}

/// Why a translation did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    SourceLanguageMissing,
    TargetLanguageMissing,
    IdenticalLanguages,
    TextTooLong,
    TranslationServiceError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::SourceLanguageMissing => "source_language_missing",
            ErrorKind::TargetLanguageMissing => "target_language_missing",
            ErrorKind::IdenticalLanguages => "identical_languages",
            ErrorKind::TextTooLong => "text_too_long",
            ErrorKind::TranslationServiceError => "translation_service_error",
        }
    }

    /// True for failures detected before any external call.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ErrorKind::TranslationServiceError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one pass through the translation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TranslationResult {
    Success { translated_text: String },
    Failure { kind: ErrorKind, message: String },
}

impl TranslationResult {
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            TranslationResult::Success { .. } => None,
            TranslationResult::Failure { kind, .. } => Some(*kind),
        }
    }
}

/// Sampling configuration sent with every translation call.
///
/// These are compiled-in and intentionally not part of `AppConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl GenerationParameters {
    pub const TRANSLATION: GenerationParameters = GenerationParameters {
        temperature: 0.3,
        top_p: 0.9,
        top_k: 40,
        max_output_tokens: 2048,
    };
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self::TRANSLATION
    }
}

/// Character and word counts shown next to a finished translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationStats {
    pub source_characters: usize,
    pub translated_characters: usize,
    pub words: usize,
}

impl TranslationStats {
    pub fn compute(source: &str, translated: &str) -> Self {
        Self {
            source_characters: source.chars().count(),
            translated_characters: translated.chars().count(),
            words: translated.split_whitespace().count(),
        }
    }
}
