//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use stickit_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub icon_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for rendered views (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub icon_url: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            icon_url: user.icon_url,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub icon_url: String,
}

/// DTO for the profile update form. Users are located by email, which is
/// not itself editable.
#[derive(Debug)]
pub struct UpdateUser {
    pub username: String,
    pub password_hash: String,
    pub icon_url: String,
}
