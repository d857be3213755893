/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` - one tracing span per request
 * - `CorsLayer::permissive` - any origin may call the API
 */

use axum::{response::Json, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `GET /` - Public welcome message
/// - `POST /auth/register`, `POST /auth/signin`, `DELETE /auth/delete/{id}`
/// - `GET /user/{id}` - behind the access gate
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(root_handler));

    let router = configure_api_routes(router, &app_state);

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome API"))
}
