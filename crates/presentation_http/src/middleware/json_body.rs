//! JSON request body extraction
//!
//! Provides a `JsonBody` extractor that decodes the raw body with
//! `serde_json` regardless of the request's `Content-Type` header.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;

/// A JSON extractor that ignores the declared content type
///
/// Unlike `axum::Json`, a missing or different `Content-Type` is not an
/// error. Any body that fails to decode into `T` is rejected with
/// [`ApiError::BadRequest`], which renders as a bare 400.
///
/// # Example
///
/// ```ignore
/// async fn handler(JsonBody(coordinates): JsonBody<Coordinates>) {
///     // coordinates decoded from the body
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            warn!(error = %e, "Failed to read request body");
            ApiError::BadRequest(e.body_text())
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(error = %e, "Failed to decode request body");
            ApiError::BadRequest(e.to_string())
        })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{StatusCode, header},
        routing::post,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct TestRequest {
        value: i64,
    }

    async fn handler(JsonBody(req): JsonBody<TestRequest>) -> String {
        req.value.to_string()
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(body: &'static str, content_type: Option<&str>) -> (StatusCode, Bytes) {
        let mut builder = axum::http::Request::builder().method("POST").uri("/test");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn decodes_json_with_json_content_type() {
        let (status, body) = send(r#"{"value": 7}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"7");
    }

    #[tokio::test]
    async fn decodes_json_without_content_type() {
        let (status, body) = send(r#"{"value": 8}"#, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"8");
    }

    #[tokio::test]
    async fn decodes_json_with_other_content_type() {
        let (status, _) = send(r#"{"value": 9}"#, Some("text/plain")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request_with_empty_body() {
        let (status, body) = send("not json", Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn empty_body_is_bad_request() {
        let (status, _) = send("", Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let (status, _) = send("{}", Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
