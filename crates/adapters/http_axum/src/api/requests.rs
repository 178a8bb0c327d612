//! Echo endpoint: reflects the inbound request back to the caller.

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use echoprobe_domain::echo::EchoPayload;

use crate::extract::{EchoRequest, header_mapping};
use crate::response::PrettyJson;

/// Possible responses from the `GET` echo.
pub enum GetResponse {
    Ok(PrettyJson<EchoPayload>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the `POST` echo.
pub enum PostResponse {
    Created(PrettyJson<EchoPayload>),
}

impl IntoResponse for PostResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/requests`
pub async fn get(headers: HeaderMap) -> GetResponse {
    GetResponse::Ok(PrettyJson(EchoPayload::get(header_mapping(&headers))))
}

/// `POST /api/requests`
///
/// Body failures never reach this function: the [`EchoRequest`] extractor
/// rejects them as a JSON `400`.
pub async fn post(echo: EchoRequest) -> PostResponse {
    PostResponse::Created(PrettyJson(EchoPayload::post(echo.body, echo.headers)))
}
