pub mod folders;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /folders                 list, create
/// /folders/{id}            get, update (PATCH), delete
///
/// /notes                   list, create
/// /notes/{id}              get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/folders", folders::router())
        .nest("/notes", notes::router())
}
