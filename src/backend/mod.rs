//! Backend Module
//!
//! This module contains the server-side code for the authgate service: an
//! Axum HTTP server with registration, sign-in, deletion and token-gated
//! profile lookup.
//!
//! # Architecture
//!
//! - **`auth`** - Password hashing, tokens, user store, account operations, handlers
//! - **`middleware`** - Access gate for protected routes
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`server`** - Configuration, application state, app creation
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── auth/           - Authentication core and handlers
//! ├── middleware/     - Access gate
//! ├── routes/         - Route configuration
//! ├── server/         - Server initialization and state
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! Requests share only the read-only signing secret and the user store.
//! The PostgreSQL pool is thread-safe; the in-memory store uses a tokio
//! `RwLock`. bcrypt work runs on the blocking thread pool.

/// Authentication and user management
pub mod auth;

/// Backend error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
