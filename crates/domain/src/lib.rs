//! # echoprobe-domain
//!
//! Value shapes for the echoprobe smoke-testing service.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **`HealthStatus`** (liveness report)
//! - Define **`EchoPayload`** (reflection of an inbound request)
//! - Define **`RequestBody`** (JSON or form-encoded input, chosen by content type)
//! - Canonicalise inbound header names for echoing
//!
//! Every value here lives for a single request/response cycle. Nothing is
//! shared between requests.
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from adapters or external IO crates.

pub mod error;
pub mod headers;
pub mod time;

pub mod body;
pub mod echo;
pub mod health;
