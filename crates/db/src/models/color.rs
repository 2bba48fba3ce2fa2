use serde::Serialize;
use sqlx::FromRow;
use stickit_core::types::DbId;

/// A palette color row. `category_id` is `None` while the color is free.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Color {
    pub id: DbId,
    pub color_name: String,
    pub color_code: String,
    pub category_id: Option<DbId>,
}

impl Color {
    pub fn is_available(&self) -> bool {
        self.category_id.is_none()
    }
}
