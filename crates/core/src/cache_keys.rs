//! Cache key derivation.
//!
//! Keys are plain strings derived from a script id so that every writer that
//! touches a script can find and evict the same entries.

use crate::types::DbId;

/// Key of the cached script record for `script_id`.
pub fn script_key(script_id: DbId) -> String {
    format!("{script_id}|qscript")
}

/// Key of the cached rendered comment list for `script_id`.
pub fn comments_key(script_id: DbId) -> String {
    format!("{script_id}|comments")
}
