//! Script models.

use scriptpad_core::permissions::ScriptOwnership;
use scriptpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `scripts` table.
///
/// Also the value cached under [`scriptpad_core::cache_keys::script_key`].
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Script {
    pub id: DbId,
    /// Identity token of the author; `None` for scripts saved anonymously.
    pub author_id: Option<String>,
    pub author_nickname: Option<String>,
    pub content: String,
    pub name: String,
    pub example: bool,
    pub created: Timestamp,
    pub modified: Timestamp,
}

impl Script {
    /// The fields the permission engine decides on.
    pub fn ownership(&self) -> ScriptOwnership<'_> {
        ScriptOwnership {
            author_id: self.author_id.as_deref(),
            example: self.example,
        }
    }
}

/// Projection used by listings: no content, no author.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ScriptSummary {
    pub id: DbId,
    pub name: String,
    pub created: Timestamp,
    pub modified: Timestamp,
}

impl From<&Script> for ScriptSummary {
    fn from(script: &Script) -> Self {
        Self {
            id: script.id,
            name: script.name.clone(),
            created: script.created,
            modified: script.modified,
        }
    }
}

/// DTO for inserting a new script.
#[derive(Debug, Clone)]
pub struct CreateScript {
    pub author_id: Option<String>,
    pub author_nickname: Option<String>,
    pub content: String,
    pub name: String,
    pub example: bool,
}

/// DTO for overwriting the editable fields of an existing script.
#[derive(Debug, Clone)]
pub struct UpdateScript {
    pub content: String,
    pub name: String,
}
