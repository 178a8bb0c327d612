//! HTTP error response mapping.
//!
//! Every failure leaves the process as a JSON body with a stable shape:
//! `{"error": …, "message": …}`.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use echoprobe_domain::error::BodyError;

use crate::response::PrettyJson;

/// JSON error body returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Request-scoped failures and the status code each one maps to.
#[derive(Debug)]
pub enum ApiError {
    /// The `POST` body could not be read or decoded. `400`.
    BadRequest(BodyError),
    /// No route matches the method and path. `404`.
    NotFound,
    /// Anything else that went wrong while handling. `500`.
    ///
    /// The description is logged but never sent to the caller.
    Internal(String),
}

impl From<BodyError> for ApiError {
    fn from(err: BodyError) -> Self {
        Self::BadRequest(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(err) => {
                tracing::error!(error = %err, "error processing POST request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        error: "Failed to process request",
                        message: err.to_string(),
                    },
                )
            }
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Not found",
                    message: "The requested resource was not found".to_string(),
                },
            ),
            Self::Internal(details) => {
                tracing::error!(error = %details, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal server error",
                        message: "An unexpected error occurred".to_string(),
                    },
                )
            }
        };

        (status, PrettyJson(body)).into_response()
    }
}

/// Fallback handler for unmatched routes and unsupported methods.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Turn a handler panic into a `500` JSON response.
///
/// Plugged into [`tower_http::catch_panic::CatchPanicLayer::custom`].
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "handler panicked with a non-string payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {details}")).into_response()
}
