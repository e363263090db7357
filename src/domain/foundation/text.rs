//! Free-text field validation shared by every record type.

use super::ValidationError;

/// Validates a required text field and returns it trimmed.
///
/// Length is measured in characters of the trimmed value.
pub fn required_text(field: &str, value: &str, min_chars: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = trimmed.chars().count();
    if len < min_chars {
        return Err(ValidationError::too_short(field, min_chars, len));
    }
    Ok(trimmed.to_string())
}

/// Like [`required_text`] with an upper bound as well.
pub fn bounded_text(
    field: &str,
    value: &str,
    min_chars: usize,
    max_chars: usize,
) -> Result<String, ValidationError> {
    let text = required_text(field, value, min_chars)?;
    let len = text.chars().count();
    if len > max_chars {
        return Err(ValidationError::too_long(field, max_chars, len));
    }
    Ok(text)
}

/// Normalizes optional free text: whitespace-only becomes `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
