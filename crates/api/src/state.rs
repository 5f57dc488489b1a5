use std::sync::Arc;

use scriptpad_cache::Cache;
use scriptpad_db::{CommentStore, ScriptStore};

use crate::config::ServerConfig;
use crate::services::{CommentService, ScriptService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT secret, identity-provider URLs, cache TTL).
    pub config: Arc<ServerConfig>,
    /// Script save/load/list/purge.
    pub scripts: ScriptService,
    /// Comment add/delete/list.
    pub comments: CommentService,
}

impl AppState {
    /// Wire both services to one store and one cache.
    pub fn new<S>(config: ServerConfig, store: Arc<S>, cache: Arc<dyn Cache>) -> Self
    where
        S: ScriptStore + CommentStore + 'static,
    {
        let ttl = config.cache.ttl;
        let script_store: Arc<dyn ScriptStore> = store.clone();
        let comment_store: Arc<dyn CommentStore> = store;

        Self {
            scripts: ScriptService::new(script_store.clone(), cache.clone(), ttl),
            comments: CommentService::new(comment_store, script_store, cache, ttl),
            config: Arc::new(config),
        }
    }
}
