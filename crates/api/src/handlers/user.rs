//! Handler for the caller's identity summary.

use axum::extract::State;
use axum::http::header::REFERER;
use axum::http::HeaderMap;
use axum::Json;

use crate::auth::links::{login_url, logout_url};
use crate::middleware::identity::CurrentCaller;
use crate::state::AppState;
use crate::wire::UserInfo;

/// GET /getuserinfo
///
/// Nickname plus a logout link for logged-in callers; an empty nickname
/// plus a login link for anonymous ones. Both links return to the referring
/// page.
pub async fn get_user_info(
    CurrentCaller(caller): CurrentCaller,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<UserInfo> {
    let referrer = headers.get(REFERER).and_then(|v| v.to_str().ok());

    let info = match &caller.identity {
        Some(identity) => UserInfo {
            nickname: identity.nickname.clone(),
            url: logout_url(&state.config.logout_url, referrer),
        },
        None => UserInfo {
            nickname: String::new(),
            url: login_url(&state.config.login_url, referrer),
        },
    };

    Json(info)
}
