/**
 * Register Handler
 *
 * POST /auth/register. Validation, the duplicate-email check and hashing
 * all happen in `Accounts::register`; this handler only shapes the request
 * and the acknowledgment.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::accounts::Accounts;
use crate::backend::auth::handlers::extract::JsonBody;
use crate::backend::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::backend::error::BackendError;

/// Register handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - missing field, password mismatch or email in use
/// * `400`, `415` or `422` - body is not a JSON object of strings
/// * `500 Internal Server Error` - hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ana",
///   "email": "ana@x.com",
///   "password": "secret1",
///   "confirmPassword": "secret1"
/// }
/// ```
pub async fn register(
    State(accounts): State<Accounts>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    tracing::info!("Register request for: {:?}", request.email);

    accounts.register(request.into()).await?;

    Ok(Json(MessageResponse::new("User created successfully")))
}
