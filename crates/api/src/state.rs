use std::sync::Arc;

use noteful_db::repositories::{FolderRepo, FolderStore, NoteRepo, NoteStore};
use noteful_db::DbPool;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The persistence adapters are injected here once at startup; handlers only
/// ever see the trait objects. Cloning is cheap (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Folder persistence adapter.
    pub folders: Arc<dyn FolderStore>,
    /// Note persistence adapter.
    pub notes: Arc<dyn NoteStore>,
}

impl AppState {
    /// Wire the Postgres adapters to a shared pool.
    pub fn with_pool(pool: DbPool) -> Self {
        Self {
            folders: Arc::new(FolderRepo::new(pool.clone())),
            notes: Arc::new(NoteRepo::new(pool)),
        }
    }
}
