//! Route definitions for login, registration, and logout.

use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// GET  /login     -> show_login
/// POST /login     -> login
/// GET  /register  -> show_register
/// POST /register  -> register
/// GET  /logout    -> logout (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::show_login).post(auth::login))
        .route("/register", get(auth::show_register).post(auth::register))
        .route("/logout", get(auth::logout))
}
