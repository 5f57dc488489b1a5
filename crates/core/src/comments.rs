//! Outcomes of comment writes.
//!
//! Refusals are results, not errors. The HTTP layer maps each outcome onto
//! the sentinel ids the browser client expects via [`CommentCreation::wire_id`]
//! and [`CommentDeletion::wire_id`].

use crate::types::{DbId, NO_ID};

/// Result of adding a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentCreation {
    /// The comment was stored under this id.
    Created(DbId),
    /// The caller is anonymous; nothing was stored.
    Refused,
}

impl CommentCreation {
    /// `"<id>"` when created, `"0"` when refused.
    pub fn wire_id(&self) -> String {
        match self {
            Self::Created(id) => id.to_string(),
            Self::Refused => NO_ID.to_string(),
        }
    }
}

/// Result of deleting a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentDeletion {
    /// The comment was removed.
    Deleted,
    /// The caller is neither the author nor an admin; the comment is kept.
    Refused(DbId),
    /// No comment has this id.
    Missing,
}

impl CommentDeletion {
    /// `"0"` when deleted, the original id when refused, `""` when missing.
    pub fn wire_id(&self) -> String {
        match self {
            Self::Deleted => NO_ID.to_string(),
            Self::Refused(id) => id.to_string(),
            Self::Missing => String::new(),
        }
    }
}
