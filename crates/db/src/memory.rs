//! In-process store with the same semantics as [`PgStore`](crate::PgStore).
//!
//! Ids start at 1 and increase monotonically per table; timestamps come from
//! the system clock. Selected with `STORE_BACKEND=memory` for local runs and
//! used by the test suites, which need no database server.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use scriptpad_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use crate::models::comment::{Comment, CreateComment};
use crate::models::script::{CreateScript, Script, ScriptSummary, UpdateScript};
use crate::store::{CommentStore, ScriptStore};

#[derive(Debug, Default)]
struct Tables {
    scripts: BTreeMap<DbId, Script>,
    comments: BTreeMap<DbId, Comment>,
    last_script_id: DbId,
    last_comment_id: DbId,
}

/// Shared, cloneable in-memory store. Clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the `modified` timestamp of a script, e.g. to age it past
    /// the retention window. Returns `false` if the script does not exist.
    pub async fn set_modified(&self, id: DbId, modified: Timestamp) -> bool {
        let mut tables = self.tables.write().await;
        match tables.scripts.get_mut(&id) {
            Some(script) => {
                script.modified = modified;
                true
            }
            None => false,
        }
    }

    pub async fn script_count(&self) -> usize {
        self.tables.read().await.scripts.len()
    }

    pub async fn comment_count(&self) -> usize {
        self.tables.read().await.comments.len()
    }
}

#[async_trait]
impl ScriptStore for MemoryStore {
    async fn find_script(&self, id: DbId) -> Result<Option<Script>, sqlx::Error> {
        Ok(self.tables.read().await.scripts.get(&id).cloned())
    }

    async fn create_script(&self, input: &CreateScript) -> Result<Script, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.last_script_id += 1;
        let now = Utc::now();
        let script = Script {
            id: tables.last_script_id,
            author_id: input.author_id.clone(),
            author_nickname: input.author_nickname.clone(),
            content: input.content.clone(),
            name: input.name.clone(),
            example: input.example,
            created: now,
            modified: now,
        };
        tables.scripts.insert(script.id, script.clone());
        Ok(script)
    }

    async fn update_script(
        &self,
        id: DbId,
        input: &UpdateScript,
    ) -> Result<Script, sqlx::Error> {
        let mut tables = self.tables.write().await;
        let script = tables
            .scripts
            .get_mut(&id)
            .ok_or(sqlx::Error::RowNotFound)?;
        script.content = input.content.clone();
        script.name = input.name.clone();
        script.modified = Utc::now();
        Ok(script.clone())
    }

    async fn list_scripts_by_author(
        &self,
        author_id: &str,
    ) -> Result<Vec<ScriptSummary>, sqlx::Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .scripts
            .values()
            .filter(|s| s.author_id.as_deref() == Some(author_id))
            .map(ScriptSummary::from)
            .collect())
    }

    async fn list_stale_anonymous_scripts(
        &self,
        cutoff: Timestamp,
    ) -> Result<Vec<ScriptSummary>, sqlx::Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .scripts
            .values()
            .filter(|s| s.author_id.is_none() && s.modified < cutoff)
            .map(ScriptSummary::from)
            .collect())
    }

    async fn delete_script(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.tables.write().await.scripts.remove(&id).is_some())
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn find_comment(&self, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        Ok(self.tables.read().await.comments.get(&id).cloned())
    }

    async fn create_comment(&self, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.last_comment_id += 1;
        let comment = Comment {
            id: tables.last_comment_id,
            script_id: input.script_id,
            author_id: input.author_id.clone(),
            author_nickname: input.author_nickname.clone(),
            content: input.content.clone(),
            created: Utc::now(),
        };
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn list_comments_for_script(
        &self,
        script_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .values()
            .filter(|c| c.script_id == script_id)
            .cloned()
            .collect())
    }

    async fn delete_comment(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.tables.write().await.comments.remove(&id).is_some())
    }
}
