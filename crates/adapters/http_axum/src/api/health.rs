//! Liveness endpoint.

use axum::response::{IntoResponse, Response};

use echoprobe_domain::health::HealthStatus;

use crate::response::PrettyJson;

/// Possible responses from the health endpoint.
pub enum CheckResponse {
    Ok(PrettyJson<HealthStatus>),
}

impl IntoResponse for CheckResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /health`
pub async fn check() -> CheckResponse {
    CheckResponse::Ok(PrettyJson(HealthStatus::healthy()))
}
