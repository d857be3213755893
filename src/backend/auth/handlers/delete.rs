/**
 * Delete Handler
 *
 * DELETE /auth/delete/{id}. Unauthenticated and without an ownership
 * check. Any failure, including an id that is not a UUID, is reported as
 * 400; deleting an unknown id succeeds.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use crate::backend::auth::accounts::Accounts;
use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::error_response;

const DELETE_FAILED: &str = "Could not delete user";

/// Delete handler
pub async fn delete_user(State(accounts): State<Accounts>, Path(id): Path<String>) -> Response {
    let id = match Uuid::parse_str(&id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Delete requested for malformed id {:?}: {}", id, e);
            return error_response(StatusCode::BAD_REQUEST, DELETE_FAILED);
        }
    };

    match accounts.delete(id).await {
        Ok(()) => Json(MessageResponse::new("User deleted successfully")).into_response(),
        Err(e) => {
            tracing::error!("Failed to delete user {}: {}", id, e);
            error_response(StatusCode::BAD_REQUEST, DELETE_FAILED)
        }
    }
}
