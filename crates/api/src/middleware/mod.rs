//! Request extractors.
//!
//! - [`auth::SessionUser`] -- Resolves the logged-in user from the `sessionId` cookie.

pub mod auth;
