/**
 * Password Hashing
 *
 * bcrypt hashing and verification for stored credentials. The encoded hash
 * carries its version, cost and salt, so verification needs nothing beyond
 * the stored string.
 */

use thiserror::Error;

/// bcrypt cost used for every stored password
pub const PASSWORD_COST: u32 = 12;

/// Hashing failures
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt could not produce a hash (entropy or parameter failure)
    #[error("failed to hash password: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// The blocking hashing task did not complete
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Salted bcrypt hasher with a fixed cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: PASSWORD_COST }
    }
}

impl PasswordHasher {
    /// Hasher with a non-default cost
    ///
    /// Only tests lower the cost; hashes remain verifiable by any hasher
    /// because the cost is embedded in the output.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// bcrypt cost factor used for new hashes
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `plaintext` with a fresh random salt
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check `plaintext` against a stored hash
    ///
    /// A malformed `hashed` value is a mismatch, not an error.
    pub fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        match bcrypt::verify(plaintext, hashed) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await?
    }

    /// [`verify`](Self::verify) on the blocking thread pool
    ///
    /// A failed task counts as a mismatch.
    pub async fn verify_blocking(&self, plaintext: String, hashed: String) -> bool {
        let hasher = *self;
        match tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hashed)).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Password verification task failed: {}", e);
                false
            }
        }
    }
}
