//! Handlers for the `/folders` resource.

use axum::extract::{OriginalUri, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use noteful_core::error::CoreError;
use noteful_core::folder::{require_folder_name, validate_folder_patch};
use noteful_core::types::{DbId, Entity};
use noteful_db::models::folder::{Folder, FolderRequest, NewFolder, UpdateFolder};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::handlers::location_for;
use crate::state::AppState;

/// Shared lookup run before every `/folders/{id}` operation.
async fn find_folder(state: &AppState, id: DbId) -> AppResult<Folder> {
    state
        .folders
        .get_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: Entity::Folder,
            id,
        }))
}

/// GET /api/folders
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Folder>>> {
    let folders = state.folders.list_all().await?;
    Ok(Json(folders))
}

/// POST /api/folders
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(input): JsonBody<FolderRequest>,
) -> AppResult<impl IntoResponse> {
    let folder_name = require_folder_name(input.folder_name)?;

    let folder = state.folders.insert(&NewFolder { folder_name }).await?;
    tracing::info!(folder_id = folder.id, "Folder created");

    let location = location_for(&uri, folder.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(folder)))
}

/// GET /api/folders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Folder>> {
    let folder = find_folder(&state, id).await?;
    Ok(Json(folder))
}

/// PATCH /api/folders/{id}
///
/// The existence check runs before the body is looked at, so an unknown id is
/// a 404 even when the body is unusable.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<JsonBody<FolderRequest>, AppError>,
) -> AppResult<StatusCode> {
    find_folder(&state, id).await?;
    let JsonBody(input) = body?;

    let folder_name = validate_folder_patch(input.folder_name)?;
    let update = UpdateFolder {
        folder_name: Some(folder_name),
    };

    let affected = state.folders.update(id, &update).await?;
    if affected == 0 {
        tracing::debug!(folder_id = id, "Folder removed before update was applied");
    } else {
        tracing::info!(folder_id = id, "Folder updated");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/folders/{id}
///
/// Notes in the folder are removed by the store's cascade.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    find_folder(&state, id).await?;

    let affected = state.folders.delete_by_id(id).await?;
    tracing::info!(folder_id = id, affected, "Folder deleted");

    Ok(StatusCode::NO_CONTENT)
}
