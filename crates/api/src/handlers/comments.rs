//! Handlers for script comments.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use scriptpad_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::identity::CurrentCaller;
use crate::state::AppState;
use crate::wire::{deserialize_id, CommentIdReply, CommentView};

/// Body of `POST /addcomment`.
#[derive(Debug, Deserialize)]
pub struct AddCommentInput {
    #[serde(rename = "qscriptId", deserialize_with = "deserialize_id")]
    pub script_id: DbId,
    pub content: String,
}

/// Body of `POST /deletecomment`.
#[derive(Debug, Deserialize)]
pub struct DeleteCommentInput {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: DbId,
}

/// Body of `POST /loadcomments`.
#[derive(Debug, Deserialize)]
pub struct LoadCommentsInput {
    #[serde(rename = "qscriptId", deserialize_with = "deserialize_id")]
    pub script_id: DbId,
}

/// POST /addcomment
///
/// `commentId` is the new id, or `"0"` when the caller is anonymous.
pub async fn add_comment(
    CurrentCaller(caller): CurrentCaller,
    State(state): State<AppState>,
    Json(input): Json<AddCommentInput>,
) -> AppResult<Json<CommentIdReply>> {
    let outcome = state
        .comments
        .add(&caller, input.script_id, input.content)
        .await?;

    Ok(Json(CommentIdReply {
        comment_id: outcome.wire_id(),
    }))
}

/// POST /deletecomment
///
/// `commentId` is `"0"` on success, the requested id when refused, and `""`
/// when no such comment exists.
pub async fn delete_comment(
    CurrentCaller(caller): CurrentCaller,
    State(state): State<AppState>,
    Json(input): Json<DeleteCommentInput>,
) -> AppResult<Json<CommentIdReply>> {
    let outcome = state.comments.delete(&caller, input.id).await?;

    Ok(Json(CommentIdReply {
        comment_id: outcome.wire_id(),
    }))
}

/// POST /loadcomments
pub async fn load_comments(
    CurrentCaller(caller): CurrentCaller,
    State(state): State<AppState>,
    Json(input): Json<LoadCommentsInput>,
) -> AppResult<Json<Vec<CommentView>>> {
    let comments = state
        .comments
        .list_for_script(&caller, input.script_id)
        .await?;
    Ok(Json(comments))
}
