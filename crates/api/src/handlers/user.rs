//! Handlers for the `/user` resource and account registration.

use axum::extract::State;
use axum::response::{Redirect, Response};
use serde::{Deserialize, Serialize};
use stickit_core::error::CoreError;
use stickit_core::validation::{
    resolve_icon, validate_email, validate_password, validate_username,
};
use stickit_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use stickit_db::repositories::UserRepo;
use stickit_db::DbPool;

use crate::auth::cookie;
use crate::auth::password::hash_for_storage;
use crate::error::{AppError, AppResult};
use crate::extract::{Form, Path};
use crate::handlers::home::NavLink;
use crate::middleware::auth::SessionUser;
use crate::response::{render, with_cookie, ViewResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /user` and `POST /register`.
#[derive(Debug, Deserialize)]
pub struct NewUserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub icon: Option<String>,
}

/// Form body for `POST /user/update`. The email is the account key and
/// comes from the session, not the form.
#[derive(Debug, Deserialize)]
pub struct UpdateUserForm {
    pub username: String,
    pub password: String,
    pub icon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfilePage {
    pub user: UserResponse,
    pub links: Vec<NavLink>,
}

impl ProfilePage {
    fn new(user: User) -> Self {
        let links = vec![
            NavLink::new("Update", "/user/update"),
            NavLink::new("Delete Account", format!("/user/delete/{}", user.email)),
            NavLink::new("Logout", "/logout"),
        ];
        Self {
            user: user.into(),
            links,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserList {
    pub users: Vec<UserResponse>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    Form(input): Form<NewUserForm>,
) -> AppResult<ViewResponse<ProfilePage>> {
    let user = create_account(&state.pool, &input).await?;
    let message = format!("User '{}' created", user.username);
    Ok(render("userProfilePage", message, ProfilePage::new(user)))
}

/// GET /user/{username}
pub async fn show_user(
    State(state): State<AppState>,
    _session: SessionUser,
    Path(username): Path<String>,
) -> AppResult<ViewResponse<ProfilePage>> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| CoreError::not_found("User", &username))?;
    Ok(render("userProfilePage", "", ProfilePage::new(user)))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _session: SessionUser,
) -> AppResult<ViewResponse<UserList>> {
    let users: Vec<UserResponse> = UserRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    let message = format!("{} user(s)", users.len());
    Ok(render("showAllUsers", message, UserList { users }))
}

/// POST /user/update
///
/// Replace the logged-in user's username, password, and icon. Every session
/// held under the old username ends; this request's session is re-issued
/// under the new one.
pub async fn update_user(
    State(state): State<AppState>,
    session: SessionUser,
    Form(input): Form<UpdateUserForm>,
) -> AppResult<Response> {
    validate_username(&input.username)?;
    validate_password(&input.password)?;
    let icon_url = resolve_icon(input.icon.as_deref())?;
    let username = input.username.trim();

    if let Some(existing) = UserRepo::find_by_username(&state.pool, username).await? {
        if existing.id != session.user.id {
            return Err(CoreError::Conflict("Username already exists".into()).into());
        }
    }

    let update = UpdateUser {
        username: username.to_string(),
        password_hash: hash_for_storage(&input.password)?,
        icon_url,
    };
    let user = UserRepo::update_by_email(&state.pool, &session.user.email, &update)
        .await?
        .ok_or_else(|| CoreError::not_found("User", &session.user.email))?;

    state.sessions.destroy_user(&session.user.username).await;
    let token = state.sessions.create(&user.username).await;
    tracing::info!(user_id = user.id, "User updated");

    let message = format!("User '{}' updated", user.username);
    Ok(with_cookie(
        cookie::issue(&token),
        render("userProfilePage", message, ProfilePage::new(user)),
    ))
}

/// GET /user/delete/{email}
///
/// Delete the logged-in user's own account and end all of its sessions.
pub async fn delete_user(
    State(state): State<AppState>,
    session: SessionUser,
    Path(email): Path<String>,
) -> AppResult<Response> {
    if email != session.user.email {
        return Err(CoreError::Unauthorized("You can only delete your own account".into()).into());
    }

    if !UserRepo::delete_by_email(&state.pool, &email).await? {
        return Err(CoreError::not_found("User", &email).into());
    }
    state.sessions.destroy_user(&session.user.username).await;
    tracing::info!(user_id = session.user.id, "User deleted");

    Ok(with_cookie(cookie::clear(), Redirect::to("/home")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate a sign-up form, reject taken usernames and emails, and insert
/// the account with a hashed password.
pub async fn create_account(pool: &DbPool, input: &NewUserForm) -> AppResult<User> {
    validate_username(&input.username)?;
    validate_email(&input.email)?;
    validate_password(&input.password)?;
    let icon_url = resolve_icon(input.icon.as_deref())?;

    let username = input.username.trim();
    let email = input.email.trim();

    if UserRepo::find_by_username(pool, username).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Username '{username}' already exists"
        ))));
    }
    if UserRepo::find_by_email(pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Email '{email}' already exists"
        ))));
    }

    let input = CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: hash_for_storage(&input.password)?,
        icon_url,
    };
    Ok(UserRepo::create(pool, &input).await?)
}
