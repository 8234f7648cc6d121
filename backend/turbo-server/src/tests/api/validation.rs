use crate::ApiError;
use crate::api::validation::{bounded_text, required_text};

#[test]
fn given_padded_text_when_required_then_trimmed() {
    assert_eq!(required_text("  hi  ", "title", 10).unwrap(), "hi");
}

#[test]
fn given_blank_text_when_required_then_validation_error_names_field() {
    let result = required_text(" \t ", "author", 10);

    assert!(matches!(
        result,
        Err(ApiError::Validation { ref field, .. }) if field == "author"
    ));
}

#[test]
fn given_text_over_limit_when_bounded_then_rejected() {
    assert!(bounded_text("abcdef", "body", 5).is_err());
}

#[test]
fn given_multibyte_text_when_bounded_then_counts_characters() {
    assert_eq!(bounded_text("héllo", "body", 5).unwrap(), "héllo");
}

#[test]
fn given_empty_text_when_bounded_then_allowed() {
    assert_eq!(bounded_text("", "body", 5).unwrap(), "");
}
