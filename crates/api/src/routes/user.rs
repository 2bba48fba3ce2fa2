//! Route definitions for the `/user` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// POST /user                  -> create_user
/// GET  /user/{username}       -> show_user (requires auth)
/// GET  /users                 -> list_users (requires auth)
/// POST /user/update           -> update_user (requires auth)
/// GET  /user/delete/{email}   -> delete_user (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", post(user::create_user))
        .route("/user/update", post(user::update_user))
        .route("/user/delete/{email}", get(user::delete_user))
        .route("/user/{username}", get(user::show_user))
        .route("/users", get(user::list_users))
}
