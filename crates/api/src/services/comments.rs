//! Comment add/delete/list.

use std::sync::Arc;
use std::time::Duration;

use scriptpad_cache::{evict, read_through, Cache};
use scriptpad_core::cache_keys::comments_key;
use scriptpad_core::comments::{CommentCreation, CommentDeletion};
use scriptpad_core::error::CoreError;
use scriptpad_core::identity::Caller;
use scriptpad_core::permissions::{can_delete_comment, can_view_comment_id};
use scriptpad_core::types::{DbId, NO_ID};
use scriptpad_db::models::comment::CreateComment;
use scriptpad_db::{CommentStore, ScriptStore};

use crate::error::{AppError, AppResult};
use crate::wire::CommentView;

#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    scripts: Arc<dyn ScriptStore>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentStore>,
        scripts: Arc<dyn ScriptStore>,
        cache: Arc<dyn Cache>,
        ttl: Duration,
    ) -> Self {
        Self {
            comments,
            scripts,
            cache,
            ttl,
        }
    }

    /// Add a comment to `script_id`.
    ///
    /// Anonymous callers are refused without touching the store. The target
    /// script must exist at this point; it is not re-checked later.
    pub async fn add(
        &self,
        caller: &Caller,
        script_id: DbId,
        content: String,
    ) -> AppResult<CommentCreation> {
        let Some(identity) = &caller.identity else {
            return Ok(CommentCreation::Refused);
        };

        if self.scripts.find_script(script_id).await?.is_none() {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Script",
                id: script_id,
            }));
        }

        let comment = self
            .comments
            .create_comment(&CreateComment {
                script_id,
                author_id: identity.id.clone(),
                author_nickname: identity.nickname.clone(),
                content,
            })
            .await?;

        // Evict after the insert so a list cached in between is dropped too.
        evict(self.cache.as_ref(), &comments_key(script_id)).await;

        tracing::info!(comment_id = comment.id, script_id, "Comment added");
        Ok(CommentCreation::Created(comment.id))
    }

    /// Delete a comment if the caller wrote it or is an admin.
    pub async fn delete(&self, caller: &Caller, comment_id: DbId) -> AppResult<CommentDeletion> {
        let Some(comment) = self.comments.find_comment(comment_id).await? else {
            tracing::debug!(comment_id, "Delete requested for unknown comment");
            return Ok(CommentDeletion::Missing);
        };

        if !can_delete_comment(&comment.author_id, caller) {
            tracing::info!(
                comment_id,
                nickname = caller.nickname(),
                "Comment delete refused"
            );
            return Ok(CommentDeletion::Refused(comment_id));
        }

        self.comments.delete_comment(comment.id).await?;
        evict(self.cache.as_ref(), &comments_key(comment.script_id)).await;

        tracing::info!(comment_id, script_id = comment.script_id, "Comment deleted");
        Ok(CommentDeletion::Deleted)
    }

    /// Comments on `script_id`, with ids blanked where the caller may not see them.
    ///
    /// The cached list is caller-neutral; redaction happens on every read.
    pub async fn list_for_script(
        &self,
        caller: &Caller,
        script_id: DbId,
    ) -> AppResult<Vec<CommentView>> {
        if script_id == NO_ID {
            return Ok(Vec::new());
        }

        let key = comments_key(script_id);
        let rendered = read_through(self.cache.as_ref(), &key, self.ttl, move || async move {
            let comments = self.comments.list_comments_for_script(script_id).await?;
            let rendered: Vec<CommentView> = comments.iter().map(CommentView::from).collect();
            Ok::<_, sqlx::Error>(Some(rendered))
        })
        .await?
        .unwrap_or_default();

        Ok(redact_ids(rendered, caller))
    }
}

/// Blank the `id` of every comment whose id `caller` may not see.
fn redact_ids(mut comments: Vec<CommentView>, caller: &Caller) -> Vec<CommentView> {
    for comment in &mut comments {
        if !can_view_comment_id(&comment.author, caller) {
            comment.id.clear();
        }
    }
    comments
}
