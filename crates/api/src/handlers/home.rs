//! Handlers for the home page, the weekday dashboard, and unmatched URLs.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use stickit_core::weekday::Weekday;
use stickit_db::models::post_it::PostIt;
use stickit_db::models::user::User;
use stickit_db::repositories::PostItRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Form;
use crate::middleware::auth::SessionUser;
use crate::response::{render, ViewResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A navigation link shown by a page.
#[derive(Debug, Serialize)]
pub struct NavLink {
    pub title: &'static str,
    pub path: String,
}

impl NavLink {
    pub fn new(title: &'static str, path: impl Into<String>) -> Self {
        Self {
            title,
            path: path.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub links: Vec<NavLink>,
}

/// Form body for `POST /home`.
#[derive(Debug, Deserialize)]
pub struct DayChoice {
    pub choice: String,
}

/// One day's outstanding post-its.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub username: String,
    /// Site navigation shown to logged-in users.
    pub links: Vec<NavLink>,
    /// Logout and the user's own profile.
    pub user_links: Vec<NavLink>,
    pub day: Weekday,
    pub day_name: &'static str,
    pub weekdays: [Weekday; 7],
    pub post_its: Vec<PostIt>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET / and GET /home
pub async fn show_home() -> ViewResponse<HomePage> {
    render(
        "homePage",
        "Welcome to Stick-It",
        HomePage {
            links: vec![
                NavLink::new("Login", "/login"),
                NavLink::new("Sign Up", "/register"),
            ],
        },
    )
}

/// POST /home
///
/// Show the dashboard for the chosen weekday.
pub async fn choose_day(
    State(state): State<AppState>,
    session: SessionUser,
    Form(input): Form<DayChoice>,
) -> AppResult<ViewResponse<Dashboard>> {
    let day: Weekday = input.choice.parse()?;
    dashboard(&state, &session.user, day).await
}

/// Fallback for any path no route or static file matches.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Render the incomplete post-its `user` has scheduled on `day`.
pub async fn dashboard(
    state: &AppState,
    user: &User,
    day: Weekday,
) -> AppResult<ViewResponse<Dashboard>> {
    let post_its = PostItRepo::list_by_weekday(&state.pool, user.id, day).await?;
    let message = if post_its.is_empty() {
        format!("Nothing left to do on {}", day.display_name())
    } else {
        format!("{} post-it(s) for {}", post_its.len(), day.display_name())
    };

    Ok(render(
        "dashboardPage",
        message,
        Dashboard {
            username: user.username.clone(),
            links: logged_in_links(),
            user_links: vec![
                NavLink::new("Logout", "/logout"),
                NavLink::new("Profile", format!("/user/{}", user.username)),
            ],
            day,
            day_name: day.display_name(),
            weekdays: Weekday::ALL,
            post_its,
        },
    ))
}

fn logged_in_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Manage Post-its", "/home"),
        NavLink::new("Add Post-it", "/postit"),
        NavLink::new("All Post-its", "/postits"),
        NavLink::new("Completed Post-its", "/complete"),
        NavLink::new("Manage Categories", "/categories"),
        NavLink::new("Add Category", "/category"),
    ]
}
