pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the editor API route tree.
///
/// The browser client calls these at the root, not under a version prefix.
///
/// ```text
/// GET  /getuserinfo       caller nickname + login/logout link
/// POST /savescript        save (overwrite or fork)
/// POST /loadscript        load one script, or the template
/// GET  /loadmyscripts     caller's scripts
/// GET  /removeoldscripts  purge stale anonymous scripts (admin)
/// POST /addcomment        add a comment
/// POST /deletecomment     delete a comment
/// POST /loadcomments      comments of one script
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/getuserinfo", get(handlers::user::get_user_info))
        .route("/savescript", post(handlers::scripts::save_script))
        .route("/loadscript", post(handlers::scripts::load_script))
        .route("/loadmyscripts", get(handlers::scripts::load_my_scripts))
        .route("/removeoldscripts", get(handlers::scripts::remove_old_scripts))
        .route("/addcomment", post(handlers::comments::add_comment))
        .route("/deletecomment", post(handlers::comments::delete_comment))
        .route("/loadcomments", post(handlers::comments::load_comments))
}
