/**
 * Application State Management
 *
 * `AppState` is the router state. The `FromRef` implementations let
 * handlers extract only the part they need, following Axum's recommended
 * pattern for state management.
 *
 * # Example
 *
 * ```rust
 * use authgate::backend::auth::Accounts;
 * use axum::extract::State;
 *
 * async fn handler(State(accounts): State<Accounts>) {
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::accounts::Accounts;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SigningSecret;
use crate::backend::auth::users::UserStore;

/// Application state shared by every handler
///
/// The signing secret is read-only after startup and the store handles its
/// own synchronisation, so cloning the state per request is cheap and safe.
#[derive(Clone)]
pub struct AppState {
    /// Account operations over the configured store
    pub accounts: Accounts,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, secret: SigningSecret) -> Self {
        Self {
            accounts: Accounts::new(store, hasher, secret),
        }
    }

    /// Token signing secret
    pub fn secret(&self) -> SigningSecret {
        self.accounts.secret().clone()
    }
}

impl FromRef<AppState> for Accounts {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}

impl FromRef<AppState> for SigningSecret {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.secret()
    }
}
