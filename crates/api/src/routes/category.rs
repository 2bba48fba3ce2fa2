//! Route definitions for the `/category` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// All routes require auth.
///
/// ```text
/// GET  /category               -> show_form
/// POST /category               -> create_category
/// GET  /category/find          -> find_category
/// GET  /categories             -> list_categories
/// POST /category/update        -> update_category
/// POST /category/delete        -> delete_category
/// POST /category/delete/{id}   -> delete_category_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/category",
            get(category::show_form).post(category::create_category),
        )
        .route("/category/find", get(category::find_category))
        .route("/categories", get(category::list_categories))
        .route("/category/update", post(category::update_category))
        .route("/category/delete", post(category::delete_category))
        .route("/category/delete/{id}", post(category::delete_category_by_id))
}
