//! Request handlers, split by surface.

pub mod account;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod pages;

use axum::http::StatusCode;

/// Shared 404 for both pipelines; authorization has already run by the
/// time this is reached.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
