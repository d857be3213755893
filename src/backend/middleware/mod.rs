//! Middleware Module
//!
//! HTTP middleware applied by the router before handlers run.
//!
//! - **`auth`** - Access gate for routes that require a bearer token
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::auth::SigningSecret;
//! use authgate::backend::middleware::auth_middleware;
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//!
//! let secret = SigningSecret::new("change-me");
//! let protected: Router = Router::new()
//!     .route("/user/{id}", get(|| async { "ok" }))
//!     .layer(from_fn_with_state(secret, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, check_bearer, AuthenticatedUser, GateDecision};
