//! # echoprobe-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve `GET /health` (liveness) and `GET`/`POST /api/requests` (echo)
//! - Turn inbound requests into domain values ([`RequestBody`], header
//!   mappings) and domain values into pretty-printed JSON responses
//! - Map every failure to a JSON error body: 400 for undecodable input,
//!   404 for unknown routes or methods, 500 for anything unexpected
//!   (handler panics included)
//!
//! ## Dependency rule
//! Depends on `echoprobe-domain` for the payload types. Never leaks axum
//! types into the domain.
//!
//! [`RequestBody`]: echoprobe_domain::body::RequestBody

pub mod api;
pub mod error;
pub mod extract;
pub mod response;
pub mod router;
