//! Validation rules for note requests.
//!
//! Notes carry more fields than folders and reference a parent folder, so
//! create requests are checked field by field in a fixed order and the
//! `folder_id` is coerced from whatever JSON shape the client sent.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};
use crate::validation::{invalid_field, missing_field, non_blank, non_empty};

/// Fields a create request must carry, in the order they are checked.
pub const REQUIRED_NOTE_FIELDS: [&str; 3] = ["name", "content", "folder_id"];

/// Returned when a patch request carries nothing to update.
pub const EMPTY_NOTE_PATCH: &str =
    "Request body must contain either 'name', 'content' or 'modified'";

/// Required fields of a note create request after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredNoteFields {
    pub name: String,
    pub content: String,
    pub folder_id: DbId,
}

/// Mutable fields of a note patch request after validation.
///
/// At least one field is `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePatchFields {
    pub name: Option<String>,
    pub content: Option<String>,
    pub modified: Option<Timestamp>,
}

/// Validate the required fields of a create request.
///
/// The first missing field (in [`REQUIRED_NOTE_FIELDS`] order) is reported.
/// `name` must be non-blank; `content` may be empty but not absent or null.
pub fn require_note_fields(
    name: Option<String>,
    content: Option<String>,
    folder_id: Option<&Value>,
) -> Result<RequiredNoteFields, CoreError> {
    let name = non_blank(name).ok_or_else(|| missing_field("name"))?;
    let content = content.ok_or_else(|| missing_field("content"))?;
    let folder_id = match folder_id {
        None | Some(Value::Null) => return Err(missing_field("folder_id")),
        Some(value) => coerce_folder_id(value)?,
    };

    Ok(RequiredNoteFields {
        name,
        content,
        folder_id,
    })
}

/// Coerce a `folder_id` to a database id.
///
/// Accepts a positive JSON integer or a string holding one (`"2"`, `" 2 "`).
pub fn coerce_folder_id(value: &Value) -> Result<DbId, CoreError> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<DbId>().ok(),
        _ => None,
    };

    id.filter(|id| *id > 0)
        .ok_or_else(|| invalid_field("folder_id"))
}

/// Validate a patch request, dropping empty values.
///
/// Empty strings are treated as absent, matching the partial-update rule that
/// only supplied values are merged.
pub fn validate_note_patch(
    name: Option<String>,
    content: Option<String>,
    modified: Option<Timestamp>,
) -> Result<NotePatchFields, CoreError> {
    let patch = NotePatchFields {
        name: non_blank(name),
        content: non_empty(content),
        modified,
    };

    if patch.name.is_none() && patch.content.is_none() && patch.modified.is_none() {
        return Err(CoreError::Validation(EMPTY_NOTE_PATCH.to_string()));
    }
    Ok(patch)
}
