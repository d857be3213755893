/**
 * Token Issuance and Verification
 *
 * This module signs and verifies the bearer tokens handed out at sign-in.
 * Tokens are HS256 JWTs whose only claim is the user id (`sub`). They carry
 * no expiry and stay valid until the signing secret is rotated.
 *
 * The secret is always passed in explicitly; nothing here reads the
 * environment.
 */

use std::fmt;
use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Process-wide HMAC signing secret
///
/// Cheap to clone; the bytes are wiped when the last clone is dropped and
/// never appear in `Debug` output.
#[derive(Clone)]
pub struct SigningSecret(Arc<Zeroizing<String>>);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Arc::new(Zeroizing::new(secret.into())))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
}

/// Token failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token could not be signed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Bad signature, malformed structure, wrong algorithm or bad claims
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation
}

/// Create a token binding `subject`
pub fn issue_token(subject: Uuid, secret: &SigningSecret) -> Result<String, TokenError> {
    let claims = Claims { sub: subject };
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(TokenError::Signing)
}

/// Verify and decode a token
pub fn verify_token(token: &str, secret: &SigningSecret) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let token_data = decode::<Claims>(token, &key, &validation()).map_err(TokenError::Invalid)?;
    Ok(token_data.claims)
}
