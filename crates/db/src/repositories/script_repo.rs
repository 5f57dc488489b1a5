//! Repository for the `scripts` table.

use scriptpad_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::script::{CreateScript, Script, ScriptSummary, UpdateScript};

/// Column list for full script rows.
const COLUMNS: &str = "id, author_id, author_nickname, content, name, example, created, modified";

/// Column list for listing projections.
const SUMMARY_COLUMNS: &str = "id, name, created, modified";

/// Provides CRUD operations for scripts.
pub struct ScriptRepo;

impl ScriptRepo {
    /// Find a script by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Script>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scripts WHERE id = $1");
        sqlx::query_as::<_, Script>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new script, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateScript) -> Result<Script, sqlx::Error> {
        let query = format!(
            "INSERT INTO scripts (author_id, author_nickname, content, name, example)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Script>(&query)
            .bind(&input.author_id)
            .bind(&input.author_nickname)
            .bind(&input.content)
            .bind(&input.name)
            .bind(input.example)
            .fetch_one(pool)
            .await
    }

    /// Overwrite content and name, bumping `modified`.
    ///
    /// Not guarded by any version check: concurrent updates are last-write-wins.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScript,
    ) -> Result<Script, sqlx::Error> {
        let query = format!(
            "UPDATE scripts SET content = $1, name = $2, modified = NOW()
             WHERE id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Script>(&query)
            .bind(&input.content)
            .bind(&input.name)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all scripts authored by `author_id`, ordered by id.
    pub async fn list_by_author(
        pool: &PgPool,
        author_id: &str,
    ) -> Result<Vec<ScriptSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM scripts
             WHERE author_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, ScriptSummary>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// List anonymous scripts last modified before `cutoff`, ordered by id.
    pub async fn list_stale_anonymous(
        pool: &PgPool,
        cutoff: Timestamp,
    ) -> Result<Vec<ScriptSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM scripts
             WHERE author_id IS NULL AND modified < $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, ScriptSummary>(&query)
            .bind(cutoff)
            .fetch_all(pool)
            .await
    }

    /// Delete a script by its ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scripts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
