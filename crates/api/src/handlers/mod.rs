pub mod auth;
pub mod category;
pub mod home;
pub mod post_it;
pub mod user;
