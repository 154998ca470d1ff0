//! Repository for the `notes` table.

use async_trait::async_trait;
use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{NewNote, Note, UpdateNote};
use crate::repositories::NoteStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, content, folder_id, modified";

/// Postgres-backed [`NoteStore`].
#[derive(Debug, Clone)]
pub struct NoteRepo {
    pool: PgPool,
}

impl NoteRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for NoteRepo {
    async fn list_all(&self) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY id");
        sqlx::query_as::<_, Note>(&query).fetch_all(&self.pool).await
    }

    /// `modified` is written only when the caller supplied one; otherwise the
    /// column stays `NULL`.
    async fn insert(&self, input: &NewNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (name, content, folder_id, modified)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.name)
            .bind(&input.content)
            .bind(input.folder_id)
            .bind(input.modified)
            .fetch_one(&self.pool)
            .await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update(&self, id: DbId, input: &UpdateNote) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notes SET
                name = COALESCE($2, name),
                content = COALESCE($3, content),
                modified = COALESCE($4, modified)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.content)
        .bind(input.modified)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
