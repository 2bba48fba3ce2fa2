//! Handlers for login, registration, and logout.

use axum::extract::State;
use axum::response::{Redirect, Response};
use serde::{Deserialize, Serialize};
use stickit_core::error::CoreError;
use stickit_core::validation::validate_required;
use stickit_core::weekday::Weekday;
use stickit_db::repositories::UserRepo;

use crate::auth::cookie;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::Form;
use crate::handlers::home::dashboard;
use crate::handlers::user::{create_account, NewUserForm};
use crate::middleware::auth::SessionUser;
use crate::response::{render, with_cookie, ViewResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Where a form page submits to.
#[derive(Debug, Serialize)]
pub struct FormPage {
    pub action: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /login
pub async fn show_login() -> ViewResponse<FormPage> {
    render("loginPage", "Log in to Stick-It", FormPage { action: "/login" })
}

/// GET /register
pub async fn show_register() -> ViewResponse<FormPage> {
    render("registerPage", "Create an account", FormPage { action: "/register" })
}

/// POST /login
///
/// Verify email and password, start a session, and show today's dashboard.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    validate_required("Email", &input.email)?;
    validate_required("Password", &input.password)?;

    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid_credentials());
    }

    let token = state.sessions.create(&user.username).await;
    tracing::info!(user_id = user.id, "User logged in");

    let page = dashboard(&state, &user, Weekday::today()).await?;
    Ok(with_cookie(cookie::issue(&token), page))
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Form(input): Form<NewUserForm>,
) -> AppResult<Redirect> {
    create_account(&state.pool, &input).await?;
    Ok(Redirect::to("/login"))
}

/// GET /logout
pub async fn logout(State(state): State<AppState>, session: SessionUser) -> Response {
    state.sessions.destroy(&session.token).await;
    tracing::info!(user_id = session.user.id, "User logged out");
    with_cookie(cookie::clear(), Redirect::to("/"))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}
