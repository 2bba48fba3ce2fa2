//! Route definitions for the `/postit` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::post_it;
use crate::state::AppState;

/// All routes require auth.
///
/// ```text
/// GET  /postit                 -> show_form
/// POST /postit                 -> create_post_it
/// GET  /postit/find            -> find_post_it
/// GET  /postits                -> list_post_its
/// GET  /update/{id}            -> show_update_form
/// POST /postit/update          -> update_post_it
/// POST /postit/delete/{id}     -> delete_post_it
/// POST /postit/complete/{id}   -> complete_post_it
/// GET  /complete               -> list_completed
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/postit", get(post_it::show_form).post(post_it::create_post_it))
        .route("/postit/find", get(post_it::find_post_it))
        .route("/postits", get(post_it::list_post_its))
        .route("/update/{id}", get(post_it::show_update_form))
        .route("/postit/update", post(post_it::update_post_it))
        .route("/postit/delete/{id}", post(post_it::delete_post_it))
        .route("/postit/complete/{id}", post(post_it::complete_post_it))
        .route("/complete", get(post_it::list_completed))
}
