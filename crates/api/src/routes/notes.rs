//! Route definitions for the `/notes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::note;
use crate::state::AppState;

/// Note routes mounted at `/notes`.
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
        .route("/", get(note::list).post(note::create))
        .route(
            "/{id}",
            get(note::get_by_id).patch(note::update).delete(note::delete),
        )
}
