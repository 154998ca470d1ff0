//! Note entity model and DTOs.

use noteful_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A note row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Note {
    pub id: DbId,
    pub name: String,
    pub content: String,
    pub folder_id: DbId,
    /// `None` until a client supplies one.
    pub modified: Option<Timestamp>,
}

/// Body of `POST /notes` as sent by the client.
///
/// `folder_id` is kept as raw JSON so numeric strings can be coerced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<serde_json::Value>,
    pub modified: Option<Timestamp>,
}

/// Body of `PATCH /notes/{id}` as sent by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub name: Option<String>,
    pub content: Option<String>,
    pub modified: Option<Timestamp>,
}

/// DTO for inserting a note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub name: String,
    pub content: String,
    pub folder_id: DbId,
    pub modified: Option<Timestamp>,
}

/// DTO for updating a note. Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UpdateNote {
    pub name: Option<String>,
    pub content: Option<String>,
    pub modified: Option<Timestamp>,
}
