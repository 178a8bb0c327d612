//! Echo payload — what the echo endpoint reflects back to the caller.

use serde::Serialize;
use serde_json::Value;

use crate::body::RequestBody;
use crate::headers::HeaderMapping;
use crate::time::{self, Timestamp};

/// Constant `message` carried by every echo.
pub const RECEIVED: &str = "Request received";

/// HTTP methods the echo endpoint answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EchoMethod {
    Get,
    Post,
}

/// Reflection of one inbound request.
///
/// Fields are declared in key order so the serialized object comes out
/// sorted.
#[derive(Debug, Clone, Serialize)]
pub struct EchoPayload {
    /// Decoded request body. Only present for `POST`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Optional note about a partially processed request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub headers: HeaderMapping,
    pub message: &'static str,
    pub method: EchoMethod,
    #[serde(serialize_with = "time::serialize")]
    pub timestamp: Timestamp,
}

impl EchoPayload {
    /// Echo of a `GET` request: headers only, no `data`.
    #[must_use]
    pub fn get(headers: HeaderMapping) -> Self {
        Self {
            data: None,
            error: None,
            headers,
            message: RECEIVED,
            method: EchoMethod::Get,
            timestamp: time::now(),
        }
    }

    /// Echo of a `POST` request carrying its decoded body.
    #[must_use]
    pub fn post(body: RequestBody, headers: HeaderMapping) -> Self {
        Self {
            data: Some(body.into_value()),
            error: None,
            headers,
            message: RECEIVED,
            method: EchoMethod::Post,
            timestamp: time::now(),
        }
    }
}
