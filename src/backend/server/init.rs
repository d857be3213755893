/**
 * Server Initialization
 *
 * This module builds the Axum application from a loaded configuration.
 *
 * # Initialization Process
 *
 * 1. Open the user store (PostgreSQL or in-memory)
 * 2. Build the application state with the bcrypt hasher and signing secret
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing authgate server");

    let store = load_store(config.database_url.as_deref()).await;

    let app_state = AppState::new(store, PasswordHasher::default(), config.jwt_secret.clone());

    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
