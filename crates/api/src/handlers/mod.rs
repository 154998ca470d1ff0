//! Request handlers for folders and notes.
//!
//! Each submodule provides async handler functions (list, create, get_by_id,
//! update, delete) for one resource. Handlers validate input with the rules in
//! `noteful_core`, call the persistence adapter held in [`AppState`], and map
//! errors via [`AppError`].
//!
//! [`AppState`]: crate::state::AppState
//! [`AppError`]: crate::error::AppError

use axum::http::Uri;
use noteful_core::types::DbId;

pub mod folder;
pub mod note;

/// `Location` of a newly created resource: the request path plus its id.
pub(crate) fn location_for(uri: &Uri, id: DbId) -> String {
    format!("{}/{id}", uri.path())
}
