//! Server Module
//!
//! Server configuration, application state, and app construction.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and store loading
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: signing secret, port, optional database URL
//! 2. **Store**: PostgreSQL with migrations, or in-memory
//! 3. **Router Creation**: routes, access gate, tracing and CORS layers
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig, DEFAULT_PORT};
pub use init::create_app;
pub use state::AppState;
