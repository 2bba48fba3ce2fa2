//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. All values are bound as
//! query parameters; nothing user-supplied is interpolated into SQL.

pub mod category_repo;
pub mod color_repo;
pub mod post_it_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use color_repo::ColorRepo;
pub use post_it_repo::PostItRepo;
pub use user_repo::UserRepo;
