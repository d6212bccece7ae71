// Input validation for translation requests
// Author: kelexine (https://github.com/kelexine)

use crate::models::languages::UNSET_LANGUAGE;
use crate::models::translation::{ErrorKind, MAX_TEXT_CHARS};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter some text to translate.")]
    EmptyInput,

    #[error("Please select a source language.")]
    SourceLanguageMissing,

    #[error("Please select a target language.")]
    TargetLanguageMissing,

    #[error("Source and target languages cannot be the same.")]
    IdenticalLanguages,

    #[error("Text is too long. Please limit to 30,000 characters.")]
    TextTooLong,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::EmptyInput => ErrorKind::EmptyInput,
            ValidationError::SourceLanguageMissing => ErrorKind::SourceLanguageMissing,
            ValidationError::TargetLanguageMissing => ErrorKind::TargetLanguageMissing,
            ValidationError::IdenticalLanguages => ErrorKind::IdenticalLanguages,
            ValidationError::TextTooLong => ErrorKind::TextTooLong,
        }
    }
}

/// Check a translation request against the static input rules.
///
/// Rules run in order and the first failure wins:
/// 1. text is empty or whitespace-only
/// 2. source language is the unset sentinel
/// 3. target language is the unset sentinel
/// 4. source and target are the same
/// 5. text exceeds `MAX_TEXT_CHARS` code points
pub fn validate(
    text: &str,
    source_language: &str,
    target_language: &str,
) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if source_language == UNSET_LANGUAGE {
        return Err(ValidationError::SourceLanguageMissing);
    }

    if target_language == UNSET_LANGUAGE {
        return Err(ValidationError::TargetLanguageMissing);
    }

    if source_language == target_language {
        return Err(ValidationError::IdenticalLanguages);
    }

    // Length is measured in chars, not bytes
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        assert_eq!(validate("Hello", "English", "Spanish"), Ok(()));
    }

    #[test]
    fn test_rule_order() {
        // Empty text wins over every language problem
        assert_eq!(
            validate("   ", UNSET_LANGUAGE, UNSET_LANGUAGE),
            Err(ValidationError::EmptyInput)
        );
        // Both unset: the source is reported first
        assert_eq!(
            validate("Hi", UNSET_LANGUAGE, UNSET_LANGUAGE),
            Err(ValidationError::SourceLanguageMissing)
        );
        assert_eq!(
            validate("Hi", "English", UNSET_LANGUAGE),
            Err(ValidationError::TargetLanguageMissing)
        );
        // Identical languages are reported before length
        let long = "a".repeat(MAX_TEXT_CHARS + 1);
        assert_eq!(
            validate(&long, "English", "English"),
            Err(ValidationError::IdenticalLanguages)
        );
    }

    #[test]
    fn test_length_counts_code_points() {
        // 30,000 multi-byte chars is well over 30,000 bytes but still valid
        let text = "é".repeat(MAX_TEXT_CHARS);
        assert_eq!(validate(&text, "French", "English"), Ok(()));

        let text = "é".repeat(MAX_TEXT_CHARS + 1);
        assert_eq!(
            validate(&text, "French", "English"),
            Err(ValidationError::TextTooLong)
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ValidationError::TextTooLong.kind(), ErrorKind::TextTooLong);
        assert!(ValidationError::EmptyInput.kind().is_validation());
    }
}
