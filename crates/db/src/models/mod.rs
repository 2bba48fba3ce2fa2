//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO where the entity supports updates

pub mod category;
pub mod color;
pub mod post_it;
pub mod user;
