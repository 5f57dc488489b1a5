//! Repository for the `comments` table.

use scriptpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list for comment queries.
const COLUMNS: &str = "id, script_id, author_id, author_nickname, content, created";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Find a comment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new comment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (script_id, author_id, author_nickname, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.script_id)
            .bind(&input.author_id)
            .bind(&input.author_nickname)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List all comments on a script, ordered by id.
    pub async fn list_for_script(
        pool: &PgPool,
        script_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE script_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(script_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a comment by its ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
