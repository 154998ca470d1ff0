//! Folder entity model and DTOs.

use noteful_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A folder row from the `folders` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Folder {
    pub id: DbId,
    pub folder_name: String,
}

/// Body of `POST /folders` and `PATCH /folders/{id}` as sent by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderRequest {
    pub folder_name: Option<String>,
}

/// DTO for inserting a folder. `folder_name` has already been validated.
#[derive(Debug, Clone)]
pub struct NewFolder {
    pub folder_name: String,
}

/// DTO for updating a folder. Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UpdateFolder {
    pub folder_name: Option<String>,
}
