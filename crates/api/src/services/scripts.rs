//! Script save/load/list/purge.

use std::sync::Arc;
use std::time::Duration;

use scriptpad_cache::{evict, read_through, set_json, Cache};
use scriptpad_core::cache_keys::{comments_key, script_key};
use scriptpad_core::identity::Caller;
use scriptpad_core::permissions::can_edit;
use scriptpad_core::scripts::{retention_cutoff, validate_script_name};
use scriptpad_core::types::{DbId, Timestamp, NO_ID};
use scriptpad_db::models::script::{CreateScript, Script, ScriptSummary, UpdateScript};
use scriptpad_db::ScriptStore;

use crate::error::AppResult;
use crate::wire::ScriptView;

#[derive(Clone)]
pub struct ScriptService {
    store: Arc<dyn ScriptStore>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl ScriptService {
    pub fn new(store: Arc<dyn ScriptStore>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// Save `content` and `name` under `id`, returning the id actually written.
    ///
    /// Overwrites the existing script when the caller may edit it. Otherwise
    /// (no such script, `id` is [`NO_ID`], or an ownership mismatch) a new
    /// script owned by the caller is created and its fresh id returned. The
    /// read-modify-write is not transactional; concurrent saves to one id are
    /// last-write-wins.
    pub async fn save(
        &self,
        caller: &Caller,
        id: DbId,
        content: String,
        name: String,
    ) -> AppResult<DbId> {
        validate_script_name(&name)?;

        let existing = if id == NO_ID {
            None
        } else {
            self.store.find_script(id).await?
        };

        let script = match existing {
            Some(script) if can_edit(Some(script.ownership()), caller) => {
                let updated = self
                    .store
                    .update_script(script.id, &UpdateScript { content, name })
                    .await?;
                tracing::info!(script_id = updated.id, "Script updated");
                updated
            }
            existing => {
                if let Some(denied) = &existing {
                    tracing::info!(
                        requested_id = denied.id,
                        nickname = caller.nickname(),
                        "Caller may not overwrite script, saving a copy"
                    );
                }
                let created = self.store.create_script(&new_script(caller, content, name)).await?;
                tracing::info!(script_id = created.id, "Script created");
                created
            }
        };

        set_json(self.cache.as_ref(), &script_key(script.id), &script, self.ttl).await;
        Ok(script.id)
    }

    /// Load a script for display.
    ///
    /// [`NO_ID`] or an unknown id yields the "new script" template. Reads go
    /// through the cache and repopulate it on a store hit.
    pub async fn load(&self, caller: &Caller, id: DbId) -> AppResult<ScriptView> {
        let script = if id == NO_ID {
            None
        } else {
            self.find(id).await?
        };

        Ok(match script {
            Some(script) => ScriptView::render(&script, caller),
            None => ScriptView::template(caller),
        })
    }

    /// Scripts authored by the caller; empty for anonymous callers.
    pub async fn list_mine(&self, caller: &Caller) -> AppResult<Vec<ScriptSummary>> {
        match caller.identity_id() {
            Some(author_id) => Ok(self.store.list_scripts_by_author(author_id).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Delete anonymous scripts not modified within the retention window.
    ///
    /// Admin only; anyone else gets an empty list and nothing is touched.
    /// Comments of purged scripts stay in the store, but their cached list
    /// is evicted together with the script entry.
    pub async fn purge_stale(
        &self,
        caller: &Caller,
        now: Timestamp,
    ) -> AppResult<Vec<ScriptSummary>> {
        if !(caller.is_authenticated() && caller.is_admin) {
            return Ok(Vec::new());
        }

        let cutoff = retention_cutoff(now);
        let stale = self.store.list_stale_anonymous_scripts(cutoff).await?;

        let mut purged = Vec::with_capacity(stale.len());
        for script in stale {
            // Another purge may have removed it since the listing.
            if !self.store.delete_script(script.id).await? {
                continue;
            }
            evict(self.cache.as_ref(), &script_key(script.id)).await;
            evict(self.cache.as_ref(), &comments_key(script.id)).await;
            purged.push(script);
        }

        tracing::info!(count = purged.len(), %cutoff, "Purged stale anonymous scripts");
        Ok(purged)
    }

    async fn find(&self, id: DbId) -> AppResult<Option<Script>> {
        let key = script_key(id);
        let found = read_through(self.cache.as_ref(), &key, self.ttl, move || {
            self.store.find_script(id)
        })
        .await?;
        Ok(found)
    }
}

/// A fresh, non-example script owned by `caller`.
fn new_script(caller: &Caller, content: String, name: String) -> CreateScript {
    CreateScript {
        author_id: caller.identity_id().map(str::to_string),
        author_nickname: caller.identity.as_ref().map(|i| i.nickname.clone()),
        content,
        name,
        example: false,
    }
}
