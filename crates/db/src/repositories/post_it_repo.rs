//! Repository for the `post_its` table.

use sqlx::PgPool;
use stickit_core::types::{flag_from_bool, DbId, FLAG_CLEAR, FLAG_SET};
use stickit_core::weekday::Weekday;

use crate::models::post_it::{CreatePostIt, PostIt, UpdatePostIt};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, category_id, title, description, pinned, \
                       day_of_week, completed, created_at, updated_at";

/// Pinned post-its float to the top of every listing.
const ORDERING: &str = "ORDER BY pinned DESC, id";

/// Provides CRUD operations for post-its.
pub struct PostItRepo;

impl PostItRepo {
    /// Insert a new (incomplete) post-it, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePostIt) -> Result<PostIt, sqlx::Error> {
        let query = format!(
            "INSERT INTO post_its (user_id, category_id, title, description, pinned, day_of_week)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PostIt>(&query)
            .bind(input.user_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(flag_from_bool(input.pinned))
            .bind(input.day_of_week.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a post-it by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PostIt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM post_its WHERE id = $1");
        sqlx::query_as::<_, PostIt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find one of a user's post-its by title.
    pub async fn find_by_title(
        pool: &PgPool,
        user_id: DbId,
        title: &str,
    ) -> Result<Option<PostIt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM post_its WHERE user_id = $1 AND title = $2");
        sqlx::query_as::<_, PostIt>(&query)
            .bind(user_id)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List every post-it.
    pub async fn list(pool: &PgPool) -> Result<Vec<PostIt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM post_its {ORDERING}");
        sqlx::query_as::<_, PostIt>(&query).fetch_all(pool).await
    }

    /// List all of a user's post-its, complete or not.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<PostIt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM post_its WHERE user_id = $1 {ORDERING}");
        sqlx::query_as::<_, PostIt>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// A user's incomplete post-its for one day: the dashboard contents.
    pub async fn list_by_weekday(
        pool: &PgPool,
        user_id: DbId,
        day: Weekday,
    ) -> Result<Vec<PostIt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM post_its
             WHERE user_id = $1 AND day_of_week = $2 AND completed = $3
             {ORDERING}"
        );
        let post_its = sqlx::query_as::<_, PostIt>(&query)
            .bind(user_id)
            .bind(day.as_str())
            .bind(FLAG_CLEAR)
            .fetch_all(pool)
            .await?;
        tracing::debug!(user_id, day = %day, count = post_its.len(), "Loaded dashboard post-its");
        Ok(post_its)
    }

    /// A user's completed post-its.
    pub async fn list_completed(pool: &PgPool, user_id: DbId) -> Result<Vec<PostIt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM post_its
             WHERE user_id = $1 AND completed = $2
             {ORDERING}"
        );
        sqlx::query_as::<_, PostIt>(&query)
            .bind(user_id)
            .bind(FLAG_SET)
            .fetch_all(pool)
            .await
    }

    /// Update a user's post-it located by title.
    ///
    /// Returns `None` if the user has no post-it with that title.
    pub async fn update_by_title(
        pool: &PgPool,
        user_id: DbId,
        title: &str,
        input: &UpdatePostIt,
    ) -> Result<Option<PostIt>, sqlx::Error> {
        let query = format!(
            "UPDATE post_its SET
                description = $3,
                day_of_week = $4,
                category_id = $5,
                pinned = $6
             WHERE user_id = $1 AND title = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PostIt>(&query)
            .bind(user_id)
            .bind(title)
            .bind(&input.description)
            .bind(input.day_of_week.as_str())
            .bind(input.category_id)
            .bind(flag_from_bool(input.pinned))
            .fetch_optional(pool)
            .await
    }

    /// Delete a user's post-it by title. Returns `true` if a row was removed.
    pub async fn delete_by_title(
        pool: &PgPool,
        user_id: DbId,
        title: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM post_its WHERE user_id = $1 AND title = $2")
            .bind(user_id)
            .bind(title)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a user's post-it by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM post_its WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the completed flag on a user's post-it.
    ///
    /// Idempotent. Returns `None` if the user has no post-it with that ID.
    pub async fn mark_completed(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<PostIt>, sqlx::Error> {
        let query = format!(
            "UPDATE post_its SET completed = $3
             WHERE user_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PostIt>(&query)
            .bind(user_id)
            .bind(id)
            .bind(FLAG_SET)
            .fetch_optional(pool)
            .await
    }
}
