/**
 * Sign-in Handler
 *
 * POST /auth/signin. Returns a bearer token for valid credentials.
 *
 * # Security
 *
 * - Password verification uses bcrypt's constant-time comparison
 * - Passwords and tokens are never logged
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::accounts::Accounts;
use crate::backend::auth::handlers::extract::JsonBody;
use crate::backend::auth::handlers::types::{SigninRequest, SigninResponse};
use crate::backend::error::BackendError;

/// Sign-in handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - missing field or wrong password
/// * `404 Not Found` - no user with this email
/// * `400`, `415` or `422` - body is not a JSON object of strings
/// * `500 Internal Server Error` - store or signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "msg": "Authentication successful",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn signin(
    State(accounts): State<Accounts>,
    JsonBody(request): JsonBody<SigninRequest>,
) -> Result<Json<SigninResponse>, BackendError> {
    tracing::info!("Sign-in request for: {:?}", request.email);

    let token = accounts.authenticate(request.into()).await?;

    Ok(Json(SigninResponse {
        msg: "Authentication successful".to_string(),
        token,
    }))
}
