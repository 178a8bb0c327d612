//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors. The domain only knows about
//! failures to turn raw bytes into a [`RequestBody`](crate::body::RequestBody);
//! the HTTP adapter decides which status code they map to.

/// Failure to turn an inbound request body into echo data.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// The body could not be read from the connection (too large, aborted, …).
    #[error("failed to read request body: {0}")]
    Read(String),
    /// The content type announced JSON but the bytes are not valid JSON.
    #[error("failed to decode JSON object: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The form-encoded body could not be decoded.
    #[error("failed to decode form data: {0}")]
    InvalidForm(#[from] serde_urlencoded::de::Error),
}
