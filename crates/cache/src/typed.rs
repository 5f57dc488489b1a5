//! Typed, best-effort access to a [`Cache`].
//!
//! Every helper here swallows cache failures after logging them: a broken
//! cache degrades to "always miss", never to a failed request.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::Cache;

/// Fetch and decode the value under `key`.
///
/// Backend errors and undecodable entries are logged and reported as a miss.
pub async fn get_json<T: DeserializeOwned>(cache: &dyn Cache, key: &str) -> Option<T> {
    let raw = match cache.get(key).await {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(key, error = %e, "Cache get failed");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding undecodable cache entry");
            None
        }
    }
}

/// Encode and store `value` under `key` for `ttl`.
///
/// Returns whether the write succeeded; failures are already logged.
pub async fn set_json<T: Serialize + ?Sized>(
    cache: &dyn Cache,
    key: &str,
    value: &T,
    ttl: Duration,
) -> bool {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(key, error = %e, "Cache set failed");
            return false;
        }
    };

    match cache.set(key, raw, ttl).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(key, error = %e, "Cache set failed");
            false
        }
    }
}

/// Remove `key`, logging on failure.
pub async fn evict(cache: &dyn Cache, key: &str) -> bool {
    match cache.delete(key).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key, error = %e, "Cache delete failed");
            false
        }
    }
}

/// Cache-aside read.
///
/// 1. Return the cached value under `key` if present.
/// 2. Otherwise run `loader`; its error propagates unchanged.
/// 3. If the loader found something, repopulate `key` (best-effort).
pub async fn read_through<T, E, F, Fut>(
    cache: &dyn Cache,
    key: &str,
    ttl: Duration,
    loader: F,
) -> Result<Option<T>, E>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    if let Some(hit) = get_json::<T>(cache, key).await {
        return Ok(Some(hit));
    }

    let loaded = loader().await?;
    if let Some(value) = &loaded {
        set_json(cache, key, value, ttl).await;
    }
    Ok(loaded)
}
