//! Best-effort, time-bounded cache for the scriptpad backend.
//!
//! ## Architecture
//!
//! - [`Cache`] -- the collaborator contract: string keys, JSON string values,
//!   every operation fallible.
//! - [`MokaCache`] -- in-process implementation on moka with a TTL per entry.
//! - [`typed`] -- JSON helpers and [`read_through`], which never surface
//!   cache failures to the caller.
//!
//! The cache is never authoritative. Anything missing or expired must be
//! repairable from the store.

use std::time::Duration;

use async_trait::async_trait;

mod config;
mod moka_cache;
pub mod typed;

pub use config::CacheConfig;
pub use moka_cache::MokaCache;
pub use typed::{evict, get_json, read_through, set_json};

/// Errors reported by a cache backend.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The backend could not be reached or refused the operation.
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

/// Key/value cache with per-entry expiry.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Fetch the value under `key`, `None` on miss or expiry.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key` for at most `ttl`.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
