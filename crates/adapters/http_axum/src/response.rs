//! Pretty-printed JSON responses.

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

const APPLICATION_JSON: &str = "application/json";

/// JSON response body rendered with two-space indentation and a trailing
/// newline.
///
/// Behaves like [`axum::Json`] otherwise: `Content-Type: application/json`,
/// status `200` unless wrapped in a `(StatusCode, _)` tuple.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson<T>(pub T);

impl<T> IntoResponse for PrettyJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(mut bytes) => {
                bytes.push(b'\n');
                (
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static(APPLICATION_JSON),
                    )],
                    bytes,
                )
                    .into_response()
            }
            Err(err) => ApiError::Internal(format!("failed to serialize response: {err}"))
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde::ser::Error as _;
    use serde_json::json;

    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_indent_body_and_set_json_content_type() {
        let response = PrettyJson(json!({"a": {"b": 1}})).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            body_text(response).await,
            "{\n  \"a\": {\n    \"b\": 1\n  }\n}\n"
        );
    }

    #[tokio::test]
    async fn should_keep_status_from_tuple() {
        let response =
            (StatusCode::CREATED, PrettyJson(BTreeMap::from([("k", "v")]))).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[tokio::test]
    async fn should_fall_back_to_internal_error_when_serialization_fails() {
        let response = PrettyJson(Unserializable).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(
            body,
            json!({
                "error": "Internal server error",
                "message": "An unexpected error occurred"
            })
        );
    }
}
