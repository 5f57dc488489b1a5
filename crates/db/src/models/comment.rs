//! Comment models.

use scriptpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Comment {
    pub id: DbId,
    /// The script this comment was written on. Not re-validated after insert.
    pub script_id: DbId,
    pub author_id: String,
    pub author_nickname: String,
    pub content: String,
    pub created: Timestamp,
}

/// DTO for inserting a new comment.
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub script_id: DbId,
    pub author_id: String,
    pub author_nickname: String,
    pub content: String,
}
