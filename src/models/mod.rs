//! Data models for the translation pipeline and the Gemini API.
//!
//! This module contains the type definitions used by:
//! - The translation pipeline request/result values (`translation`)
//! - The upstream Google Gemini API (`gemini`)
//! - The supported language catalog (`languages`)

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;
pub mod languages;
pub mod translation;

pub use gemini::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, ModelInfo};
pub use languages::{supported_languages, Language, UNSET_LANGUAGE};
pub use translation::{
    ErrorKind, GenerationParameters, TranslationRequest, TranslationResult, TranslationStats,
    MAX_TEXT_CHARS,
};
