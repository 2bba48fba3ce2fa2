//! Repository for the `colors` table (the seeded palette).

use sqlx::PgPool;
use stickit_core::types::DbId;

use crate::models::color::Color;

const COLUMNS: &str = "id, color_name, color_code, category_id";

/// Tracks which palette colors are held by which category.
pub struct ColorRepo;

impl ColorRepo {
    /// Every palette color, in seed order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Color>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colors ORDER BY id");
        sqlx::query_as::<_, Color>(&query).fetch_all(pool).await
    }

    /// Colors not assigned to any category.
    pub async fn list_available(pool: &PgPool) -> Result<Vec<Color>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colors WHERE category_id IS NULL ORDER BY id");
        sqlx::query_as::<_, Color>(&query).fetch_all(pool).await
    }

    /// The color held by a category.
    pub async fn find_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Option<Color>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colors WHERE category_id = $1");
        sqlx::query_as::<_, Color>(&query)
            .bind(category_id)
            .fetch_optional(pool)
            .await
    }

    /// Claim a free color for a category.
    ///
    /// Returns `None` when the color does not exist or is already held, so
    /// two concurrent claims cannot both succeed.
    pub async fn assign_category(
        pool: &PgPool,
        color_code: &str,
        category_id: DbId,
    ) -> Result<Option<Color>, sqlx::Error> {
        let query = format!(
            "UPDATE colors SET category_id = $2
             WHERE color_code = $1 AND category_id IS NULL
             RETURNING {COLUMNS}"
        );
        let claimed = sqlx::query_as::<_, Color>(&query)
            .bind(color_code)
            .bind(category_id)
            .fetch_optional(pool)
            .await?;
        if claimed.is_none() {
            tracing::debug!(%color_code, category_id, "Color not available to claim");
        }
        Ok(claimed)
    }

    /// Release whatever color a category holds. Returns the number of
    /// colors released (0 or 1).
    pub async fn release_category(pool: &PgPool, category_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE colors SET category_id = NULL WHERE category_id = $1")
            .bind(category_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Release every color. Returns the number of colors released.
    pub async fn reset_palette(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE colors SET category_id = NULL WHERE category_id IS NOT NULL")
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
