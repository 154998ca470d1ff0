//! Repository layer.
//!
//! Each resource has a persistence adapter trait ([`FolderStore`],
//! [`NoteStore`]) and a Postgres implementation holding a [`PgPool`]. The API
//! receives the adapters as trait objects at startup, so handlers never reach
//! for a global connection.
//!
//! Every method is a single round trip. Absence is never an error: lookups
//! return `None` and mutations return the affected-row count.
//!
//! [`PgPool`]: sqlx::PgPool

use async_trait::async_trait;
use noteful_core::types::DbId;

use crate::models::folder::{Folder, NewFolder, UpdateFolder};
use crate::models::note::{NewNote, Note, UpdateNote};

pub mod folder_repo;
pub mod note_repo;

pub use folder_repo::FolderRepo;
pub use note_repo::NoteRepo;

/// Persistence adapter for the `folders` table.
#[async_trait]
pub trait FolderStore: Send + Sync {
    /// All folders in id order.
    async fn list_all(&self) -> Result<Vec<Folder>, sqlx::Error>;

    /// Insert a folder, returning the stored row with its generated id.
    async fn insert(&self, input: &NewFolder) -> Result<Folder, sqlx::Error>;

    async fn get_by_id(&self, id: DbId) -> Result<Option<Folder>, sqlx::Error>;

    /// Delete a folder (and, through the FK cascade, its notes).
    /// Returns the number of folder rows removed.
    async fn delete_by_id(&self, id: DbId) -> Result<u64, sqlx::Error>;

    /// Apply the `Some` fields of `input`. Returns the number of rows updated.
    async fn update(&self, id: DbId, input: &UpdateFolder) -> Result<u64, sqlx::Error>;

    /// One round trip to the backing store.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// Persistence adapter for the `notes` table.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes in id order.
    async fn list_all(&self) -> Result<Vec<Note>, sqlx::Error>;

    /// Insert a note, returning the stored row with its generated id.
    async fn insert(&self, input: &NewNote) -> Result<Note, sqlx::Error>;

    async fn get_by_id(&self, id: DbId) -> Result<Option<Note>, sqlx::Error>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete_by_id(&self, id: DbId) -> Result<u64, sqlx::Error>;

    /// Apply the `Some` fields of `input`. Returns the number of rows updated.
    async fn update(&self, id: DbId, input: &UpdateNote) -> Result<u64, sqlx::Error>;
}
