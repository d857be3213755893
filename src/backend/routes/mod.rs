//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - Account and user endpoints
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use authgate::backend::auth::{MemoryUserStore, PasswordHasher, SigningSecret};
//! use authgate::backend::routes::create_router;
//! use authgate::backend::server::AppState;
//!
//! let state = AppState::new(
//!     Arc::new(MemoryUserStore::new()),
//!     PasswordHasher::default(),
//!     SigningSecret::new("change-me"),
//! );
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// Account and user endpoints
pub mod api_routes;

pub use router::create_router;
