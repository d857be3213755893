/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * and opens the user store.
 *
 * # Configuration Sources
 *
 * - `JWT_SECRET` - token signing secret (required)
 * - `SERVER_PORT` - listen port (default 9000)
 * - `DATABASE_URL` - PostgreSQL connection string (optional)
 *
 * # Error Handling
 *
 * A missing signing secret is fatal: the server refuses to start. A missing
 * or unreachable database is not; the server logs a warning and keeps users
 * in memory instead.
 */

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::memory::MemoryUserStore;
use crate::backend::auth::sessions::SigningSecret;
use crate::backend::auth::users::{PgUserStore, UserStore};

/// Port used when `SERVER_PORT` is unset
pub const DEFAULT_PORT: u16 = 9000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Token signing secret
    pub jwt_secret: SigningSecret,
    /// PostgreSQL URL; `None` keeps users in memory
    pub database_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .map(SigningSecret::new)
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let port = match lookup("SERVER_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        Ok(Self {
            port,
            jwt_secret,
            database_url,
        })
    }

    /// Address to bind, on all interfaces
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Open the user store
///
/// This function:
/// 1. Connects to PostgreSQL when `database_url` is set
/// 2. Runs the embedded migrations
/// 3. Falls back to the in-memory store when there is no URL or the
///    connection fails
pub async fn load_store(database_url: Option<&str>) -> Arc<dyn UserStore> {
    let Some(database_url) = database_url else {
        tracing::warn!("DATABASE_URL not set. Users will be kept in memory.");
        return Arc::new(MemoryUserStore::new());
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Users will be kept in memory.");
            return Arc::new(MemoryUserStore::new());
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Arc::new(PgUserStore::new(pool))
}
