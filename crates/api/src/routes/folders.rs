//! Route definitions for the `/folders` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::folder;
use crate::state::AppState;

/// Folder routes mounted at `/folders`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(folder::list).post(folder::create))
        .route(
            "/{id}",
            get(folder::get_by_id)
                .patch(folder::update)
                .delete(folder::delete),
        )
}
