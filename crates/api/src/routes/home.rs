//! Route definitions for the home page and dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::home;
use crate::state::AppState;

/// ```text
/// GET  /       -> show_home
/// GET  /home   -> show_home
/// POST /home   -> choose_day (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::show_home))
        .route("/home", get(home::show_home).post(home::choose_day))
}
