//! Field-level helpers shared by the folder and note rules.

use crate::error::CoreError;

/// Keep a text value only if it contains something other than whitespace.
///
/// Partial updates treat blank strings the same as absent fields.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Keep a text value only if it is non-empty. Whitespace counts as content.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Error for a required request field that was absent or null.
pub fn missing_field(field: &str) -> CoreError {
    CoreError::Validation(format!("Missing '{field}' in request body"))
}

/// Error for a request field that was present but could not be used.
pub fn invalid_field(field: &str) -> CoreError {
    CoreError::Validation(format!("Invalid '{field}' in request body"))
}
