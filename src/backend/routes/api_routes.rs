/**
 * API Routes
 *
 * # Routes
 *
 * ## Accounts
 * - `POST /auth/register` - User registration
 * - `POST /auth/signin` - User sign-in, returns a bearer token
 * - `DELETE /auth/delete/{id}` - User deletion
 *
 * ## Users
 * - `GET /user/{id}` - Public profile (requires a bearer token)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{delete_user, get_profile, register, signin};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure account routes
///
/// Only the profile route sits behind the access gate; registration,
/// sign-in and deletion are public.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/user/{id}", get(get_profile))
        .route_layer(from_fn_with_state(app_state.secret(), auth_middleware));

    router
        .route("/auth/register", post(register))
        .route("/auth/signin", post(signin))
        .route("/auth/delete/{id}", delete(delete_user))
        .merge(protected)
}
