//! Permission engine for scripts and comments.
//!
//! Pure decision functions. A refusal is never an error: callers turn a
//! `false` into a fork (save), an `update = false` flag (load), an echoed id
//! (comment delete) or a redacted id (comment list).

use crate::identity::Caller;

/// Ownership facts of a persisted script relevant to overwriting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptOwnership<'a> {
    /// Identity token of the author, `None` for anonymous scripts.
    pub author_id: Option<&'a str>,
    /// Curated sample flag.
    pub example: bool,
}

/// Whether `caller` may overwrite `existing`.
///
/// | example | admin | different author | may overwrite |
/// |---------|-------|------------------|---------------|
/// | no      | no    | no               | yes           |
/// | no      | no    | yes              | no            |
/// | no      | yes   | no               | yes           |
/// | no      | yes   | yes              | no            |
/// | yes     | no    | no               | no            |
/// | yes     | no    | yes              | no            |
/// | yes     | yes   | no               | yes           |
/// | yes     | yes   | yes              | yes           |
///
/// An absent record is always writable: it is a create.
/// Anonymous authorship compares equal to an anonymous caller.
pub fn can_edit(existing: Option<ScriptOwnership<'_>>, caller: &Caller) -> bool {
    match existing {
        None => true,
        Some(script) if script.example => caller.is_admin,
        Some(script) => script.author_id == caller.identity_id(),
    }
}

/// Whether `caller` may delete a comment written by `author_id`.
pub fn can_delete_comment(author_id: &str, caller: &Caller) -> bool {
    caller.is_admin || caller.identity_id() == Some(author_id)
}

/// Whether `caller` may see the id of a comment written by `author_nickname`.
///
/// Compares display nicknames, not identity tokens. Only used to redact ids
/// in list responses; comment content is always visible.
pub fn can_view_comment_id(author_nickname: &str, caller: &Caller) -> bool {
    caller.is_admin || author_nickname == caller.nickname()
}
