/**
 * Error Conversion
 *
 * Backend errors implement `IntoResponse` so handlers and the access gate
 * can return them directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "msg": "Error message",
 *   "error": "Error message",
 *   "status": 422
 * }
 * ```
 *
 * `msg` repeats `error`; success bodies use the same key.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::BackendError;

/// JSON body rendered for every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Caller-safe message
    pub msg: String,
    /// Same as `msg`
    pub error: String,
    /// Numeric HTTP status, repeated for clients that only see the body
    pub status: u16,
}

/// Render `status` and `message` as a JSON error response
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    let body = ErrorBody {
        msg: message.clone(),
        error: message,
        status: status.as_u16(),
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Internal errors are logged here with their cause; the body only ever
    /// carries the opaque message.
    fn into_response(self) -> Response {
        match &self {
            BackendError::Internal { .. } => tracing::error!("{}", self),
            BackendError::MalformedBody { .. } => tracing::warn!("{}", self),
            _ => {}
        }
        error_response(self.status_code(), self.message())
    }
}
