//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use stickit_core::error::CoreError;
use stickit_db::models::user::User;
use stickit_db::repositories::UserRepo;

use crate::auth::cookie;
use crate::error::AppError;
use crate::state::AppState;

/// The logged-in user, resolved from the `sessionId` cookie.
///
/// Add it as a handler parameter to require a session. Requests without a
/// live session are rejected with 401 before the handler body runs.
///
/// ```ignore
/// async fn my_handler(session: SessionUser) -> AppResult<ViewResponse<()>> {
///     tracing::info!(user_id = session.user.id, "handling request");
///     Ok(render("somePage", "", ()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// The cookie value, needed to end the session at logout.
    pub token: String,
    /// The user's current database row.
    pub user: User,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = cookie::session_token(&parts.headers)
            .ok_or_else(|| unauthorized("Please log in to continue"))?;

        let session = state
            .sessions
            .check(&token)
            .await
            .ok_or_else(|| unauthorized("Session is invalid or has expired"))?;

        let Some(user) = UserRepo::find_by_username(&state.pool, &session.username).await? else {
            // Account renamed or deleted since login.
            state.sessions.destroy(&token).await;
            return Err(unauthorized("Session user no longer exists"));
        };

        Ok(SessionUser { token, user })
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}
