//! JSON shapes exchanged with the browser editor.
//!
//! Field names and the string encoding of ids are fixed by the existing
//! client. All ids go out as decimal strings; incoming ids may be either
//! strings or numbers.

use scriptpad_core::identity::{display_nickname, Caller};
use scriptpad_core::permissions::can_edit;
use scriptpad_core::scripts::NEW_SCRIPT_NAME;
use scriptpad_core::types::{format_timestamp, DbId, NO_ID};
use scriptpad_db::models::comment::Comment;
use scriptpad_db::models::script::{Script, ScriptSummary};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/* --------------------------------------------------------------------------
Incoming ids
-------------------------------------------------------------------------- */

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Deserialize an id sent either as a JSON integer or as a decimal string.
///
/// Anything else (floats, non-numeric strings, null) is rejected.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid id '{text}'"))),
    }
}

/* --------------------------------------------------------------------------
Scripts
-------------------------------------------------------------------------- */

/// Full script as shown in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptView {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created: String,
    pub modified: String,
    pub name: String,
    pub example: bool,
    /// Whether the caller is an administrator.
    pub admin: bool,
    /// Whether saving would overwrite this script rather than fork it.
    pub update: bool,
}

impl ScriptView {
    /// Render a persisted script for `caller`.
    pub fn render(script: &Script, caller: &Caller) -> Self {
        Self {
            id: script.id.to_string(),
            author: display_nickname(script.author_nickname.as_deref()).to_string(),
            content: script.content.clone(),
            created: format_timestamp(&script.created),
            modified: format_timestamp(&script.modified),
            name: script.name.clone(),
            example: script.example,
            admin: caller.is_admin,
            update: can_edit(Some(script.ownership()), caller),
        }
    }

    /// The unsaved "new script" template.
    pub fn template(caller: &Caller) -> Self {
        Self {
            id: NO_ID.to_string(),
            author: caller.nickname().to_string(),
            content: String::new(),
            created: String::new(),
            modified: String::new(),
            name: NEW_SCRIPT_NAME.to_string(),
            example: false,
            admin: caller.is_admin,
            update: false,
        }
    }
}

/// Listing entry: no content, no author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSummaryView {
    pub id: String,
    pub created: String,
    pub modified: String,
    pub name: String,
}

impl From<&ScriptSummary> for ScriptSummaryView {
    fn from(summary: &ScriptSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            created: format_timestamp(&summary.created),
            modified: format_timestamp(&summary.modified),
            name: summary.name.clone(),
        }
    }
}

/// Response of `/savescript`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedScript {
    pub qscript_id: String,
}

/* --------------------------------------------------------------------------
Comments
-------------------------------------------------------------------------- */

/// Rendered comment.
///
/// Cached per script without redaction; `id` is blanked per caller at serve
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created: String,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            author: comment.author_nickname.clone(),
            content: comment.content.clone(),
            created: format_timestamp(&comment.created),
        }
    }
}

/// Response of `/addcomment` and `/deletecomment`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentIdReply {
    pub comment_id: String,
}

/* --------------------------------------------------------------------------
User
-------------------------------------------------------------------------- */

/// Response of `/getuserinfo`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    /// Empty for anonymous callers.
    pub nickname: String,
    /// Login URL for anonymous callers, logout URL otherwise.
    pub url: String,
}
