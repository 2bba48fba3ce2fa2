//! Post-it entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use stickit_core::types::{flag_to_bool, DbId, Timestamp};
use stickit_core::weekday::Weekday;

/// A row from the `post_its` table.
///
/// `pinned` and `completed` hold the stored `'T'`/`'F'` flags; use
/// [`PostIt::is_pinned`] and [`PostIt::is_completed`] to read them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostIt {
    pub id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub description: String,
    pub pinned: String,
    /// Lowercase weekday name.
    pub day_of_week: String,
    pub completed: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PostIt {
    pub fn is_pinned(&self) -> bool {
        flag_to_bool(&self.pinned)
    }

    pub fn is_completed(&self) -> bool {
        flag_to_bool(&self.completed)
    }
}

/// DTO for creating a new post-it. New post-its always start incomplete.
#[derive(Debug)]
pub struct CreatePostIt {
    pub user_id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub description: String,
    pub pinned: bool,
    pub day_of_week: Weekday,
}

/// DTO for the post-it update form. Title is the lookup key and is not
/// editable.
#[derive(Debug)]
pub struct UpdatePostIt {
    pub description: String,
    pub day_of_week: Weekday,
    pub category_id: DbId,
    pub pinned: bool,
}
