//! Store traits consumed by the services, and the PostgreSQL implementation.
//!
//! Both traits report failures as [`sqlx::Error`] whatever the backend, so
//! the HTTP layer maps store errors in one place.

use async_trait::async_trait;
use scriptpad_core::types::{DbId, Timestamp};

use crate::models::comment::{Comment, CreateComment};
use crate::models::script::{CreateScript, Script, ScriptSummary, UpdateScript};
use crate::repositories::{CommentRepo, ScriptRepo};
use crate::DbPool;

/// Durable storage of scripts.
#[async_trait]
pub trait ScriptStore: Send + Sync {
    async fn find_script(&self, id: DbId) -> Result<Option<Script>, sqlx::Error>;

    /// Insert a script; the store assigns `id`, `created` and `modified`.
    async fn create_script(&self, input: &CreateScript) -> Result<Script, sqlx::Error>;

    /// Overwrite content and name and bump `modified`.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] if the script does not exist.
    async fn update_script(&self, id: DbId, input: &UpdateScript)
        -> Result<Script, sqlx::Error>;

    async fn list_scripts_by_author(
        &self,
        author_id: &str,
    ) -> Result<Vec<ScriptSummary>, sqlx::Error>;

    /// Anonymous scripts with `modified < cutoff`.
    async fn list_stale_anonymous_scripts(
        &self,
        cutoff: Timestamp,
    ) -> Result<Vec<ScriptSummary>, sqlx::Error>;

    /// Returns `true` if a script was removed.
    async fn delete_script(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// Durable storage of comments.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn find_comment(&self, id: DbId) -> Result<Option<Comment>, sqlx::Error>;

    /// Insert a comment; the store assigns `id` and `created`.
    async fn create_comment(&self, input: &CreateComment) -> Result<Comment, sqlx::Error>;

    async fn list_comments_for_script(&self, script_id: DbId)
        -> Result<Vec<Comment>, sqlx::Error>;

    /// Returns `true` if a comment was removed.
    async fn delete_comment(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// [`ScriptStore`] and [`CommentStore`] over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScriptStore for PgStore {
    async fn find_script(&self, id: DbId) -> Result<Option<Script>, sqlx::Error> {
        ScriptRepo::find_by_id(&self.pool, id).await
    }

    async fn create_script(&self, input: &CreateScript) -> Result<Script, sqlx::Error> {
        ScriptRepo::create(&self.pool, input).await
    }

    async fn update_script(
        &self,
        id: DbId,
        input: &UpdateScript,
    ) -> Result<Script, sqlx::Error> {
        ScriptRepo::update(&self.pool, id, input).await
    }

    async fn list_scripts_by_author(
        &self,
        author_id: &str,
    ) -> Result<Vec<ScriptSummary>, sqlx::Error> {
        ScriptRepo::list_by_author(&self.pool, author_id).await
    }

    async fn list_stale_anonymous_scripts(
        &self,
        cutoff: Timestamp,
    ) -> Result<Vec<ScriptSummary>, sqlx::Error> {
        ScriptRepo::list_stale_anonymous(&self.pool, cutoff).await
    }

    async fn delete_script(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ScriptRepo::delete(&self.pool, id).await
    }
}

#[async_trait]
impl CommentStore for PgStore {
    async fn find_comment(&self, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        CommentRepo::find_by_id(&self.pool, id).await
    }

    async fn create_comment(&self, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        CommentRepo::create(&self.pool, input).await
    }

    async fn list_comments_for_script(
        &self,
        script_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        CommentRepo::list_for_script(&self.pool, script_id).await
    }

    async fn delete_comment(&self, id: DbId) -> Result<bool, sqlx::Error> {
        CommentRepo::delete(&self.pool, id).await
    }
}
