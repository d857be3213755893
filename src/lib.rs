//! authgate - Main Library
//!
//! authgate is a small user-account service: registration, sign-in,
//! deletion, and token-gated profile lookup over HTTP.
//!
//! # Overview
//!
//! The interesting part is the authentication core:
//! - bcrypt password hashing and constant-time verification
//! - HS256 token issuance and verification with an explicit secret
//! - An access gate that turns a bearer header into an allow/deny decision
//!
//! Everything else, routing, JSON shaping and persistence, is plumbing
//! around that core. Persistence sits behind the `UserStore` trait with a
//! PostgreSQL implementation and an in-memory one.
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `BackendError` carries the HTTP-facing taxonomy
//! - Component errors (`PasswordError`, `TokenError`, `StoreError`,
//!   `ConfigError`) are `thiserror` enums

/// Backend server-side code
pub mod backend;
