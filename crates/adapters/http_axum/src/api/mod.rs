//! JSON API handler modules.

pub mod health;
pub mod requests;

use axum::Router;
use axum::routing::get;

use crate::error::not_found;

/// Build the `/api` sub-router.
pub fn routes() -> Router {
    Router::new().route(
        "/requests",
        get(requests::get).post(requests::post).fallback(not_found),
    )
}
