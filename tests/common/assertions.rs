//! Assertion helpers for API responses

use axum::http::StatusCode;
use axum_test::TestResponse;

/// Assert the status code and the `error` message of a JSON error body
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], message, "unexpected error body: {body}");
    assert_eq!(body["msg"], message, "unexpected error body: {body}");
    assert_eq!(body["status"], status.as_u16());
}
