//! Category entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use stickit_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    /// Palette hex code, uppercase, no leading `#`.
    pub color_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug)]
pub struct CreateCategory {
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub color_code: String,
}
