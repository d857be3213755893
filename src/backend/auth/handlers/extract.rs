/**
 * JSON Body Extractor
 *
 * Wraps `axum::Json` so that a body which cannot be read (wrong content
 * type, invalid JSON, a field of the wrong type) is rejected with a
 * [`BackendError`] and rendered as the usual JSON error body instead of
 * axum's plain-text rejection.
 */

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON request body with [`BackendError`] as its rejection
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::types::SigninRequest;
    use assert_matches::assert_matches;
    use axum::{body::Body, http::StatusCode};

    fn request(content_type: &str, body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/auth/signin")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_reads_json_body() {
        let JsonBody(body) = JsonBody::<SigninRequest>::from_request(
            request("application/json", r#"{"email":"ana@x.com","password":"secret1"}"#),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(body.email.as_deref(), Some("ana@x.com"));
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_malformed_body() {
        let result =
            JsonBody::<SigninRequest>::from_request(request("text/plain", "hello"), &()).await;
        assert_matches!(
            result,
            Err(BackendError::MalformedBody { status, .. })
                if status == StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed_body() {
        let result =
            JsonBody::<SigninRequest>::from_request(request("application/json", "{\"email\":"), &())
                .await;
        assert_matches!(result, Err(BackendError::MalformedBody { .. }));
    }
}
