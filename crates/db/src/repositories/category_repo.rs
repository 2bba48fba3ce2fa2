//! Repository for the `categories` table.

use sqlx::PgPool;
use stickit_core::types::DbId;

use crate::models::category::{Category, CreateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, description, color_code, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// Does not claim the color; pair with
    /// [`ColorRepo::assign_category`](crate::repositories::ColorRepo::assign_category).
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (user_id, title, description, color_code)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.color_code)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find one of a user's categories by title.
    pub async fn find_by_title(
        pool: &PgPool,
        user_id: DbId,
        title: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE user_id = $1 AND title = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List every category, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// List a user's categories ordered by title.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE user_id = $1 ORDER BY title");
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the description of a user's category located by title.
    ///
    /// Returns `None` if the user has no category with that title.
    pub async fn update_description_by_title(
        pool: &PgPool,
        user_id: DbId,
        title: &str,
        description: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET description = $3
             WHERE user_id = $1 AND title = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(title)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user's category by title. Its color is released and its
    /// post-its are removed by the foreign keys. Returns `true` if a row was
    /// removed.
    pub async fn delete_by_title(
        pool: &PgPool,
        user_id: DbId,
        title: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE user_id = $1 AND title = $2")
            .bind(user_id)
            .bind(title)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a user's category by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// ID of the category currently holding `color_code`, if any.
    pub async fn find_id_by_color(
        pool: &PgPool,
        color_code: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT category_id FROM colors
             WHERE color_code = $1 AND category_id IS NOT NULL",
        )
        .bind(color_code)
        .fetch_optional(pool)
        .await
    }
}
