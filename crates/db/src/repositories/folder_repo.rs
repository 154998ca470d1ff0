//! Repository for the `folders` table.

use async_trait::async_trait;
use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::folder::{Folder, NewFolder, UpdateFolder};
use crate::repositories::FolderStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, folder_name";

/// Postgres-backed [`FolderStore`].
#[derive(Debug, Clone)]
pub struct FolderRepo {
    pool: PgPool,
}

impl FolderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepo {
    async fn list_all(&self) -> Result<Vec<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders ORDER BY id");
        sqlx::query_as::<_, Folder>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn insert(&self, input: &NewFolder) -> Result<Folder, sqlx::Error> {
        let query = format!("INSERT INTO folders (folder_name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Folder>(&query)
            .bind(&input.folder_name)
            .fetch_one(&self.pool)
            .await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders WHERE id = $1");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update(&self, id: DbId, input: &UpdateFolder) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE folders SET folder_name = COALESCE($2, folder_name) WHERE id = $1",
        )
        .bind(id)
        .bind(&input.folder_name)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
