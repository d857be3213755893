/**
 * Profile Handler
 *
 * GET /user/{id}. Mounted behind the access gate, so a request only gets
 * here with a verified token. Any authenticated caller may read any
 * profile.
 */

use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use uuid::Uuid;

use crate::backend::auth::accounts::Accounts;
use crate::backend::auth::handlers::types::ProfileResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;

/// Get profile handler
///
/// # Errors
///
/// * `404 Not Found` - no user with this id, or the id is not a UUID
/// * `500 Internal Server Error` - store failure
pub async fn get_profile(
    State(accounts): State<Accounts>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let id = Uuid::parse_str(&id).map_err(|_| BackendError::not_found("User not found"))?;
    tracing::debug!("Profile {} requested by {}", id, caller.user_id);

    let user = accounts.fetch_profile(id).await?;

    Ok(Json(ProfileResponse { user }))
}
