//! Handlers for the `/notes` resource.

use axum::extract::{OriginalUri, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use noteful_core::error::CoreError;
use noteful_core::note::{require_note_fields, validate_note_patch};
use noteful_core::types::{DbId, Entity};
use noteful_db::models::note::{
    CreateNoteRequest, NewNote, Note, UpdateNote, UpdateNoteRequest,
};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::handlers::location_for;
use crate::state::AppState;

/// Shared lookup run before every `/notes/{id}` operation.
async fn find_note(state: &AppState, id: DbId) -> AppResult<Note> {
    state
        .notes
        .get_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: Entity::Note,
            id,
        }))
}

/// GET /api/notes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Note>>> {
    let notes = state.notes.list_all().await?;
    Ok(Json(notes))
}

/// POST /api/notes
///
/// The parent folder is checked here so a dangling `folder_id` is reported as
/// a client error instead of surfacing as a foreign key violation.
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(input): JsonBody<CreateNoteRequest>,
) -> AppResult<impl IntoResponse> {
    let fields = require_note_fields(input.name, input.content, input.folder_id.as_ref())?;

    if state.folders.get_by_id(fields.folder_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Folder with id {} does not exist",
            fields.folder_id
        ))));
    }

    let new_note = NewNote {
        name: fields.name,
        content: fields.content,
        folder_id: fields.folder_id,
        modified: input.modified,
    };
    let note = state.notes.insert(&new_note).await?;
    tracing::info!(note_id = note.id, folder_id = note.folder_id, "Note created");

    let location = location_for(&uri, note.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(note)))
}

/// GET /api/notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Note>> {
    let note = find_note(&state, id).await?;
    Ok(Json(note))
}

/// PATCH /api/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<JsonBody<UpdateNoteRequest>, AppError>,
) -> AppResult<StatusCode> {
    find_note(&state, id).await?;
    let JsonBody(input) = body?;

    let patch = validate_note_patch(input.name, input.content, input.modified)?;
    let update = UpdateNote {
        name: patch.name,
        content: patch.content,
        modified: patch.modified,
    };

    let affected = state.notes.update(id, &update).await?;
    if affected == 0 {
        tracing::debug!(note_id = id, "Note removed before update was applied");
    } else {
        tracing::info!(note_id = id, "Note updated");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/notes/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    find_note(&state, id).await?;

    let affected = state.notes.delete_by_id(id).await?;
    tracing::info!(note_id = id, affected, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}
