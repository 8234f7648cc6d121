use crate::ApiError;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_POST_BODY_LENGTH: usize = 20_000;
pub const MAX_AUTHOR_LENGTH: usize = 100;
pub const MAX_COMMENT_BODY_LENGTH: usize = 5_000;

/// Trim `value` and require 1..=`max` characters
pub fn required_text(value: &str, field: &str, max: usize) -> Result<String, ApiError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{field} is required"), field));
    }

    bounded_text(trimmed, field, max)
}

/// Trim `value` and cap it at `max` characters; empty is allowed
pub fn bounded_text(value: &str, field: &str, max: usize) -> Result<String, ApiError> {
    let trimmed = value.trim();
    let length = trimmed.chars().count();

    if length > max {
        return Err(ApiError::validation(
            format!("{field} must be at most {max} characters, got {length}"),
            field,
        ));
    }

    Ok(trimmed.to_string())
}
