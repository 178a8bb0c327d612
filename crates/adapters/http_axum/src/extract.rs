//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};

use echoprobe_domain::body::RequestBody;
use echoprobe_domain::error::BodyError;
use echoprobe_domain::headers::{HeaderMapping, collect};

use crate::error::ApiError;

/// Collect every inbound header into the echoed mapping.
#[must_use]
pub fn header_mapping(headers: &HeaderMap) -> HeaderMapping {
    collect(
        headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_bytes())),
    )
}

/// Headers plus decoded body of a `POST` echo.
///
/// Rejects with [`ApiError::BadRequest`] when the body cannot be read
/// (e.g. it exceeds the body limit) or decoded, so the caller always gets
/// the JSON error shape rather than axum's plain-text rejection.
#[derive(Debug)]
pub struct EchoRequest {
    pub headers: HeaderMapping,
    pub body: RequestBody,
}

impl<S> FromRequest<S> for EchoRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = header_mapping(req.headers());
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| BodyError::Read(rejection.body_text()))?;
        let body = RequestBody::parse(content_type.as_deref(), &bytes)?;

        Ok(Self { headers, body })
    }
}
