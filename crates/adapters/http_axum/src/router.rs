//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

use crate::error::{handle_panic, not_found};

/// Build the top-level axum [`Router`].
///
/// Serves `/health` and nests the echo routes under `/api`. Anything else,
/// including a known path with an unsupported method, falls through to the
/// JSON `404`.
pub fn build() -> Router {
    with_fault_handling(
        Router::new()
            .route("/health", get(crate::api::health::check).fallback(not_found))
            .nest("/api", crate::api::routes()),
    )
}

/// Install the `404` fallback and the outer layers.
///
/// A [`CatchPanicLayer`] converts handler panics into the JSON `500`, and a
/// [`TraceLayer`] logs each HTTP request/response at the `DEBUG` level using
/// the `tracing` ecosystem. Server errors are already logged once at `ERROR`
/// by [`ApiError`](crate::error::ApiError), so the trace layer reports them
/// at `DEBUG` too.
fn with_fault_handling(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
        )
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn should_return_healthy_when_health_check_called() {
        let response = build().oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn should_echo_get_without_data() {
        let response = build()
            .oneshot(
                Request::builder()
                    .uri("/api/requests")
                    .header("x-probe", "one")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["method"], "GET");
        assert_eq!(body["headers"], json!({"X-Probe": "one"}));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn should_echo_post_as_created() {
        let response = build()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/requests")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"hello":"world"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["method"], "POST");
        assert_eq!(body["data"], json!({"hello": "world"}));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_path() {
        let response = build().oneshot(get_request("/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": "Not found",
                "message": "The requested resource was not found"
            })
        );
    }

    #[tokio::test]
    async fn should_return_not_found_for_unsupported_method() {
        for (method, uri) in [("DELETE", "/health"), ("POST", "/health"), ("PUT", "/api/requests")] {
            let response = build()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
            assert_eq!(body_json(response).await["error"], "Not found");
        }
    }

    #[tokio::test]
    async fn should_return_not_found_for_bare_api_prefix() {
        let response = build().oneshot(get_request("/api")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn should_convert_handler_panic_to_internal_error() {
        let app = with_fault_handling(Router::new().route("/boom", get(explode)));

        let response = app.clone().oneshot(get_request("/boom")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(
            body_json(response).await,
            json!({
                "error": "Internal server error",
                "message": "An unexpected error occurred"
            })
        );

        let response = app.oneshot(get_request("/missing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Shared buffer collecting formatted log output.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn error_lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .filter(|line| line.trim_start().starts_with("ERROR"))
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `request` through `app` with every log event (down to `TRACE`)
    /// captured on the current thread.
    async fn send_capturing_logs(app: Router, request: Request<Body>) -> (StatusCode, CapturedLogs) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(Level::TRACE)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let response = app.oneshot(request).await.unwrap();
        (response.status(), logs)
    }

    #[tokio::test]
    async fn should_log_one_error_for_malformed_post_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/requests")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, logs) = send_capturing_logs(build(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let errors = logs.error_lines();
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains("failed to decode JSON object"), "{errors:?}");
    }

    #[tokio::test]
    async fn should_log_one_error_for_handler_panic() {
        let app = with_fault_handling(Router::new().route("/boom", get(explode)));

        let (status, logs) = send_capturing_logs(app, get_request("/boom")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let errors = logs.error_lines();
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains("handler exploded"), "{errors:?}");
    }

    #[tokio::test]
    async fn should_not_log_errors_for_successful_or_unmatched_requests() {
        for uri in ["/health", "/api/requests", "/nope"] {
            let (_, logs) = send_capturing_logs(build(), get_request(uri)).await;
            assert!(logs.error_lines().is_empty(), "{uri}: {:?}", logs.error_lines());
        }
    }
}
