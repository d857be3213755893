//! Authentication test helpers
//!
//! Provides a test server backed by the in-memory store, plus helpers for
//! registering users, signing in, and building `Authorization` headers.

use std::sync::Arc;

use authgate::backend::auth::{MemoryUserStore, PasswordHasher, SigningSecret, UserStore};
use authgate::backend::routes::create_router;
use authgate::backend::server::AppState;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use uuid::Uuid;

/// Secret used by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test server plus direct access to its store
pub struct TestApp {
    pub server: TestServer,
    pub store: MemoryUserStore,
    pub secret: SigningSecret,
}

/// Build a test server over an empty in-memory store
///
/// Uses the minimum bcrypt cost to keep the suite fast.
pub fn create_test_app() -> TestApp {
    let store = MemoryUserStore::new();
    let secret = SigningSecret::new(TEST_SECRET);
    let state = AppState::new(
        Arc::new(store.clone()),
        PasswordHasher::with_cost(4),
        secret.clone(),
    );

    let server = TestServer::new(create_router(state)).expect("Failed to start test server");

    TestApp {
        server,
        store,
        secret,
    }
}

/// Build a test server over an arbitrary store
pub fn create_test_server_with_store(store: Arc<dyn UserStore>) -> TestServer {
    let state = AppState::new(
        store,
        PasswordHasher::with_cost(4),
        SigningSecret::new(TEST_SECRET),
    );
    TestServer::new(create_router(state)).expect("Failed to start test server")
}

impl TestApp {
    /// Register a user through the API and return its id
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Uuid {
        let response = self
            .server
            .post("/auth/register")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
                "confirmPassword": password
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        self.store
            .find_by_email(email)
            .await
            .expect("store lookup failed")
            .expect("registered user missing from store")
            .id
    }

    /// Sign in through the API and return the token
    pub async fn signin(&self, email: &str, password: &str) -> String {
        let response = self
            .server
            .post("/auth/signin")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: serde_json::Value = response.json();
        body["token"]
            .as_str()
            .expect("token missing from sign-in response")
            .to_string()
    }
}

/// `Authorization` header name and a `Bearer <token>` value
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        axum::http::header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("invalid header value"),
    )
}
