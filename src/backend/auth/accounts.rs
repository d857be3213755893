/**
 * Account Operations
 *
 * Registration, authentication, deletion and profile lookup. These
 * functions carry the business rules; the HTTP handlers only shape requests
 * and responses around them.
 *
 * # Registration Process
 *
 * 1. Validate name, email, password and confirmation, in that order
 * 2. Reject emails that are already registered
 * 3. Hash the password with bcrypt (cost 12)
 * 4. Insert the user; the store assigns the id
 *
 * # Authentication Process
 *
 * 1. Validate email and password
 * 2. Look up the user by email
 * 3. Verify the password against the stored hash
 * 4. Issue a token bound to the user id
 *
 * # Known Gaps
 *
 * Deletion and profile lookup do not check that the caller owns the
 * account, and issued tokens never expire. Both mirror the service's
 * established behaviour and are tracked as open security questions.
 * The email check before insert is not atomic with the insert.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{issue_token, SigningSecret};
use crate::backend::auth::users::{NewUser, UserProfile, UserStore};
use crate::backend::error::BackendError;

/// Registration input
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// Check required fields in the fixed order name, email, password,
    /// confirmation, then that both passwords agree
    pub fn validate(&self) -> Result<(), BackendError> {
        if self.name.is_empty() {
            return Err(BackendError::validation("name", "Name is required"));
        }
        if self.email.is_empty() {
            return Err(BackendError::validation("email", "Email is required"));
        }
        if self.password.is_empty() {
            return Err(BackendError::validation("password", "Password is required"));
        }
        if self.confirm_password.is_empty() {
            return Err(BackendError::validation(
                "confirmPassword",
                "Please confirm the password",
            ));
        }
        if self.password != self.confirm_password {
            return Err(BackendError::validation(
                "confirmPassword",
                "Passwords do not match",
            ));
        }
        Ok(())
    }
}

/// Sign-in input
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), BackendError> {
        if self.email.is_empty() {
            return Err(BackendError::validation("email", "Email is required"));
        }
        if self.password.is_empty() {
            return Err(BackendError::validation("password", "Password is required"));
        }
        Ok(())
    }
}

/// Account operations over a user store
#[derive(Clone)]
pub struct Accounts {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    secret: SigningSecret,
}

impl Accounts {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, secret: SigningSecret) -> Self {
        Self {
            store,
            hasher,
            secret,
        }
    }

    /// Secret used to sign and verify tokens
    pub fn secret(&self) -> &SigningSecret {
        &self.secret
    }

    /// Register a new user
    ///
    /// Returns only success; no user data and no token.
    pub async fn register(&self, registration: Registration) -> Result<(), BackendError> {
        registration.validate()?;

        if self.store.find_by_email(&registration.email).await?.is_some() {
            tracing::warn!("Email already registered: {}", registration.email);
            return Err(BackendError::conflict(
                "Email already in use, please use another",
            ));
        }

        let password_hash = self.hasher.hash_blocking(registration.password).await?;

        let user = self
            .store
            .insert(NewUser {
                name: registration.name,
                email: registration.email,
                password_hash,
            })
            .await?;

        tracing::info!("User created: {} ({})", user.id, user.email);
        Ok(())
    }

    /// Verify credentials and issue a token for the matching user
    pub async fn authenticate(&self, credentials: Credentials) -> Result<String, BackendError> {
        credentials.validate()?;

        let user = self
            .store
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| {
                tracing::info!("Sign-in for unknown email: {}", credentials.email);
                BackendError::not_found("User not found")
            })?;

        let valid = self
            .hasher
            .verify_blocking(credentials.password, user.password_hash)
            .await;
        if !valid {
            tracing::warn!("Invalid password for user: {}", user.id);
            return Err(BackendError::InvalidCredentials);
        }

        let token = issue_token(user.id, &self.secret)?;

        tracing::info!("User signed in: {}", user.id);
        Ok(token)
    }

    /// Delete a user by id
    ///
    /// Deleting an id that does not exist succeeds.
    pub async fn delete(&self, id: Uuid) -> Result<(), BackendError> {
        self.store.delete_by_id(id).await?;
        tracing::info!("Delete requested for user: {}", id);
        Ok(())
    }

    /// Public profile of a user
    pub async fn fetch_profile(&self, id: Uuid) -> Result<UserProfile, BackendError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| BackendError::not_found("User not found"))
    }
}
