/**
 * Backend Error Types
 *
 * This module defines the error taxonomy returned by account operations and
 * the access gate. Every variant maps to exactly one HTTP status code.
 *
 * # Error Categories
 *
 * ## Expected Outcomes
 *
 * These are normal user-facing results and are never logged as failures:
 * - `Validation` - a required field is missing or the passwords differ
 * - `Conflict` - the email is already registered
 * - `NotFound` - no such user
 * - `InvalidCredentials` - the password does not match
 * - `Unauthorized` - no `Authorization` header on a protected route
 * - `InvalidToken` - the presented token is malformed or unverifiable
 * - `MalformedBody` - the request body is not a JSON object of strings
 *
 * ## Internal Errors
 *
 * `Internal` wraps persistence and cryptographic failures. The cause is kept
 * for logging but never rendered to the caller.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::StoreError;

/// Opaque message shown to callers for every internal failure.
pub const INTERNAL_MESSAGE: &str = "Server error, please try again later";

/// Message shown to callers when the request body cannot be read as JSON.
pub const MALFORMED_BODY_MESSAGE: &str = "Invalid request body";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use authgate::backend::error::BackendError;
///
/// let err = BackendError::validation("email", "Email is required");
/// assert_eq!(err.status_code().as_u16(), 422);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or mismatched input, attributed to one field
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// Request field that failed validation
        field: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// A user with this email already exists
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// The requested user does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Password did not match the stored hash
    #[error("Invalid password")]
    InvalidCredentials,

    /// No `Authorization` header on a protected route
    #[error("Access denied")]
    Unauthorized,

    /// Token could not be verified
    #[error("Invalid token")]
    InvalidToken,

    /// Body missing, not JSON, or a field of the wrong type
    #[error("Malformed body: {detail}")]
    MalformedBody {
        /// Status chosen by the JSON extractor (400, 415 or 422)
        status: StatusCode,
        /// Parser detail, for logs only
        detail: String,
    },

    /// Persistence or cryptographic failure
    #[error("Internal error: {message}")]
    Internal {
        /// Cause, for operators only
        message: String,
    },
}

impl BackendError {
    /// Create a new validation error for `field`
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new internal error
    ///
    /// The message is logged by the response conversion and replaced with
    /// [`INTERNAL_MESSAGE`] in the body.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `Conflict`, `InvalidCredentials` - 422 Unprocessable Entity
    /// - `NotFound` - 404 Not Found
    /// - `Unauthorized` - 401 Unauthorized
    /// - `InvalidToken` - 400 Bad Request
    /// - `MalformedBody` - the status reported by the JSON extractor
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } | Self::InvalidCredentials => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::BAD_REQUEST,
            Self::MalformedBody { status, .. } => *status,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message safe to return to the caller
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::Conflict { message }
            | Self::NotFound { message } => message.clone(),
            Self::MalformedBody { .. } => MALFORMED_BODY_MESSAGE.to_string(),
            Self::Internal { .. } => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether this error is an internal failure rather than an expected outcome
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        Self::internal(format!("user store: {err}"))
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        Self::internal(format!("password hashing: {err}"))
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid(_) => Self::InvalidToken,
            TokenError::Signing(_) => Self::internal(format!("token signing: {err}")),
        }
    }
}
