pub mod auth;
pub mod category;
pub mod health;
pub mod home;
pub mod post_it;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /, /home                    home page (GET); weekday dashboard (POST, auth)
///
/// /login                      form (GET), login (POST)
/// /register                   form (GET), sign up (POST)
/// /logout                     end session (GET, auth)
///
/// /user                       create (POST)
/// /user/{username}            profile (GET, auth)
/// /users                      list (GET, auth)
/// /user/update                update own account (POST, auth)
/// /user/delete/{email}        delete own account (GET, auth)
///
/// /category                   form (GET), create (POST)
/// /category/find?title=       show by title (GET)
/// /categories                 list own (GET)
/// /category/update            update description (POST)
/// /category/delete            delete by title (POST)
/// /category/delete/{id}       delete by id (POST)
///
/// /postit                     form (GET), create (POST)
/// /postit/find?title=         show by title (GET)
/// /postits                    list own (GET)
/// /update/{id}                update form (GET)
/// /postit/update              update (POST)
/// /postit/delete/{id}         delete (POST)
/// /postit/complete/{id}       mark completed (POST)
/// /complete                   list completed (GET)
/// ```
///
/// Category and post-it routes all require a session.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .merge(auth::router())
        .merge(user::router())
        .merge(category::router())
        .merge(post_it::router())
}
