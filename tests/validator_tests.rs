// Validation property tests
// Author: kelexine (https://github.com/kelexine)

use proptest::prelude::*;
use translingua::models::{MAX_TEXT_CHARS, UNSET_LANGUAGE};
use translingua::translation::{validate, ValidationError};

proptest! {
    #[test]
    fn whitespace_only_text_is_empty_input(text in "[ \t\r\n]{0,64}") {
        prop_assert_eq!(
            validate(&text, "English", "Spanish"),
            Err(ValidationError::EmptyInput)
        );
    }

    #[test]
    fn same_language_is_rejected(lang in "[A-Z][a-z]{2,12}", text in "[a-z]{1,40}") {
        prop_assume!(lang != UNSET_LANGUAGE);
        prop_assert_eq!(
            validate(&text, &lang, &lang),
            Err(ValidationError::IdenticalLanguages)
        );
    }

    #[test]
    fn validation_is_idempotent(text in ".{0,80}", source in "[A-Za-z ]{0,16}", target in "[A-Za-z ]{0,16}") {
        prop_assert_eq!(
            validate(&text, &source, &target),
            validate(&text, &source, &target)
        );
    }
}

#[test]
fn test_length_boundary() {
    let exact = "a".repeat(MAX_TEXT_CHARS);
    assert_eq!(validate(&exact, "English", "Spanish"), Ok(()));

    let over = "a".repeat(MAX_TEXT_CHARS + 1);
    assert_eq!(
        validate(&over, "English", "Spanish"),
        Err(ValidationError::TextTooLong)
    );
}

#[test]
fn test_leading_whitespace_counts_toward_length() {
    let text = format!(" {}", "a".repeat(MAX_TEXT_CHARS));
    assert_eq!(
        validate(&text, "English", "Spanish"),
        Err(ValidationError::TextTooLong)
    );
}

#[test]
fn test_messages_are_user_facing() {
    assert_eq!(
        ValidationError::EmptyInput.to_string(),
        "Please enter some text to translate."
    );
    assert_eq!(
        ValidationError::TextTooLong.to_string(),
        "Text is too long. Please limit to 30,000 characters."
    );
}
