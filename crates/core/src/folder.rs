//! Validation rules for folder requests.

use crate::error::CoreError;
use crate::validation::non_blank;

/// Returned when a create request carries no usable folder name.
pub const MISSING_FOLDER_NAME: &str = "Missing folder name";

/// Returned when a patch request carries nothing to update.
pub const EMPTY_FOLDER_PATCH: &str = "Request body must contain a valid folder name";

/// Validate the `folder_name` of a create request.
///
/// Absent, empty and whitespace-only names are all rejected; a folder name is
/// never blank once persisted.
pub fn require_folder_name(folder_name: Option<String>) -> Result<String, CoreError> {
    non_blank(folder_name).ok_or_else(|| CoreError::Validation(MISSING_FOLDER_NAME.to_string()))
}

/// Validate the fields of a patch request, returning the value to apply.
///
/// `folder_name` is the only mutable field, so the patch is rejected unless
/// it is supplied and non-blank.
pub fn validate_folder_patch(folder_name: Option<String>) -> Result<String, CoreError> {
    non_blank(folder_name).ok_or_else(|| CoreError::Validation(EMPTY_FOLDER_PATCH.to_string()))
}
