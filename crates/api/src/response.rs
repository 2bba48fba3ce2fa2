//! Rendered views.
//!
//! Every successful page is a `{ "view", "message", "data" }` envelope. Use
//! [`render`] instead of ad-hoc `json!` so the shape stays uniform; failures
//! go through [`AppError`](crate::error::AppError) and render `errorPage`.

use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// A named view with its payload.
#[derive(Debug, Serialize)]
pub struct ViewResponse<T: Serialize> {
    pub view: &'static str,
    pub message: String,
    pub data: T,
}

/// Render `view` with a message and payload.
pub fn render<T: Serialize>(
    view: &'static str,
    message: impl Into<String>,
    data: T,
) -> ViewResponse<T> {
    ViewResponse {
        view,
        message: message.into(),
        data,
    }
}

impl<T: Serialize> IntoResponse for ViewResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Attach a `Set-Cookie` header to any response.
pub fn with_cookie(set_cookie: String, inner: impl IntoResponse) -> Response {
    ([(SET_COOKIE, set_cookie)], inner).into_response()
}
