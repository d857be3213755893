/**
 * User Model and Persistence
 *
 * This module defines the user records and the `UserStore` trait through
 * which account operations reach persistence, plus the PostgreSQL-backed
 * implementation.
 *
 * The store exposes exactly four operations: lookup by email, lookup by id
 * (without the password hash), insert, and delete. Email uniqueness is
 * checked by callers before inserting; the PostgreSQL schema also carries a
 * unique index, so a racing insert fails with a store error.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// Stored user record, including the password hash
///
/// Never serialised to callers; use [`UserProfile`] for responses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address, unique across users
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Public projection of a user, without the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// User awaiting insertion; the store assigns `id` and `created_at`
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Persistence failures raised by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database driver error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Query rejected by the store for another reason
    #[error("query failed: {message}")]
    Query {
        /// Human-readable error message
        message: String,
    },
}

impl StoreError {
    /// Create a new query error
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence collaborator consumed by account operations
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user, including the password hash, by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Fetch a user's public fields by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError>;

    /// Persist a new user, returning it with its assigned id
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// Remove the user with `id`; removing a missing id is not an error
    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;
}

/// PostgreSQL-backed user store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        if user.password_hash.is_empty() {
            return Err(StoreError::query("refusing to insert user without password hash"));
        }

        let id = Uuid::new_v4();
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Deleted {} user row(s) for {}", result.rows_affected(), id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_drops_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            created_at: Utc::now(),
        };

        let profile = UserProfile::from(user.clone());
        assert_eq!(profile.id, user.id);

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ana@x.com");
    }
}
