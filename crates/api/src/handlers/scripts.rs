//! Handlers for saving, loading and listing scripts.
//!
//! Every endpoint takes a JSON body (or nothing) and answers with the bare
//! JSON shape the editor expects; there is no response envelope.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use scriptpad_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::identity::CurrentCaller;
use crate::state::AppState;
use crate::wire::{deserialize_id, SavedScript, ScriptSummaryView, ScriptView};

/* --------------------------------------------------------------------------
Request bodies
-------------------------------------------------------------------------- */

/// Body of `POST /savescript`.
#[derive(Debug, Deserialize)]
pub struct SaveScriptInput {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: DbId,
    pub content: String,
    pub name: String,
}

/// Body of `POST /loadscript`.
#[derive(Debug, Deserialize)]
pub struct LoadScriptInput {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: DbId,
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// POST /savescript
///
/// Overwrite the script when the caller may edit it, otherwise save a copy.
/// Answers with the id actually written.
pub async fn save_script(
    CurrentCaller(caller): CurrentCaller,
    State(state): State<AppState>,
    Json(input): Json<SaveScriptInput>,
) -> AppResult<Json<SavedScript>> {
    let id = state
        .scripts
        .save(&caller, input.id, input.content, input.name)
        .await?;

    Ok(Json(SavedScript {
        qscript_id: id.to_string(),
    }))
}

/// POST /loadscript
///
/// Id `0` or an unknown id yields the "new script" template.
pub async fn load_script(
    CurrentCaller(caller): CurrentCaller,
    State(state): State<AppState>,
    Json(input): Json<LoadScriptInput>,
) -> AppResult<Json<ScriptView>> {
    let view = state.scripts.load(&caller, input.id).await?;
    Ok(Json(view))
}

/// GET /loadmyscripts
pub async fn load_my_scripts(
    CurrentCaller(caller): CurrentCaller,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ScriptSummaryView>>> {
    let scripts = state.scripts.list_mine(&caller).await?;
    Ok(Json(scripts.iter().map(ScriptSummaryView::from).collect()))
}

/// GET /removeoldscripts
///
/// Admin only. Deletes anonymous scripts untouched for the retention window
/// and lists what was removed. Other callers get `[]`.
pub async fn remove_old_scripts(
    CurrentCaller(caller): CurrentCaller,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ScriptSummaryView>>> {
    let removed = state.scripts.purge_stale(&caller, Utc::now()).await?;
    Ok(Json(removed.iter().map(ScriptSummaryView::from).collect()))
}
