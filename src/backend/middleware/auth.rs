/**
 * Access Gate
 *
 * This module protects routes that require a bearer token. `check_bearer`
 * is the gate itself: it inspects the headers and returns a
 * [`GateDecision`]. `auth_middleware` applies that decision to a request,
 * either attaching the caller to the request extensions and continuing, or
 * short-circuiting with an error response.
 *
 * # Decisions
 *
 * - No `Authorization` header → `Unauthorized` (401)
 * - Header present, token missing or unverifiable → `BadToken` (400)
 * - Token verifies → `Allowed`
 *
 * The token is the second space-separated segment of the header value.
 * The scheme word is not checked.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::backend::auth::sessions::{verify_token, Claims, SigningSecret};
use crate::backend::error::BackendError;

/// Authenticated caller extracted from a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
        }
    }
}

/// Outcome of the access gate for one request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Token verified; continue with these claims
    Allowed(Claims),
    /// No `Authorization` header
    Unauthorized,
    /// Token missing from the header or failed verification
    BadToken,
}

/// Token segment of an `Authorization` header value
///
/// Returns an empty string when there is no second segment.
pub fn bearer_token(value: &str) -> &str {
    value.split(' ').nth(1).unwrap_or("")
}

/// Decide whether a request may proceed
pub fn check_bearer(headers: &HeaderMap, secret: &SigningSecret) -> GateDecision {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return GateDecision::Unauthorized;
    };

    let token = value.to_str().map(bearer_token).unwrap_or("");

    match verify_token(token, secret) {
        Ok(claims) => GateDecision::Allowed(claims),
        Err(e) => {
            tracing::debug!("Rejected bearer token: {}", e);
            GateDecision::BadToken
        }
    }
}

/// Authentication middleware
///
/// Use with `axum::middleware::from_fn_with_state`, passing the signing
/// secret as state.
pub async fn auth_middleware(
    State(secret): State<SigningSecret>,
    mut request: Request,
    next: Next,
) -> Response {
    match check_bearer(request.headers(), &secret) {
        GateDecision::Allowed(claims) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser::from(claims));
            next.run(request).await
        }
        GateDecision::Unauthorized => {
            tracing::warn!("Missing Authorization header");
            BackendError::Unauthorized.into_response()
        }
        GateDecision::BadToken => {
            tracing::warn!("Invalid bearer token");
            BackendError::InvalidToken.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::issue_token;
    use assert_matches::assert_matches;
    use axum::{
        body::Body,
        http::{HeaderValue, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Extension, Router,
    };
    use tower::ServiceExt;

    fn secret() -> SigningSecret {
        SigningSecret::new("gate-secret")
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_segments() {
        assert_eq!(bearer_token("Bearer abc"), "abc");
        assert_eq!(bearer_token("Bearer"), "");
        assert_eq!(bearer_token("Bearer  abc"), "");
        assert_eq!(bearer_token("Token abc extra"), "abc");
    }

    #[test]
    fn test_no_header_is_unauthorized() {
        assert_eq!(check_bearer(&HeaderMap::new(), &secret()), GateDecision::Unauthorized);
    }

    #[test]
    fn test_garbage_token_is_bad_token() {
        let headers = headers_with("Bearer garbage");
        assert_eq!(check_bearer(&headers, &secret()), GateDecision::BadToken);
    }

    #[test]
    fn test_header_without_token_is_bad_token() {
        assert_eq!(check_bearer(&headers_with("Bearer"), &secret()), GateDecision::BadToken);
        assert_eq!(check_bearer(&headers_with(""), &secret()), GateDecision::BadToken);
    }

    #[test]
    fn test_valid_token_is_allowed() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, &secret()).unwrap();
        let headers = headers_with(&format!("Bearer {token}"));

        assert_matches!(
            check_bearer(&headers, &secret()),
            GateDecision::Allowed(claims) if claims.sub == user_id
        );
    }

    #[test]
    fn test_token_from_other_secret_is_bad_token() {
        let token = issue_token(Uuid::new_v4(), &SigningSecret::new("other")).unwrap();
        let headers = headers_with(&format!("Bearer {token}"));
        assert_eq!(check_bearer(&headers, &secret()), GateDecision::BadToken);
    }

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        user.user_id.to_string()
    }

    fn protected() -> Router {
        Router::new()
            .route("/protected", get(whoami))
            .layer(from_fn_with_state(secret(), auth_middleware))
    }

    fn request(authorization: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_middleware_rejects_missing_header() {
        let response = protected().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_middleware_rejects_bad_token() {
        let response = protected()
            .oneshot(request(Some("Bearer garbage")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_middleware_attaches_caller() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, &secret()).unwrap();

        let response = protected()
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, user_id.to_string().as_bytes());
    }
}
