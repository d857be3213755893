/**
 * Account Handler Types
 *
 * Request and response bodies for the account endpoints. Request fields
 * are optional so that an absent or `null` field reaches the field-specific
 * validation as an empty string rather than failing deserialization.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::accounts::{Credentials, Registration};
use crate::backend::auth::users::UserProfile;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Plaintext password, hashed before storage
    #[serde(default)]
    pub password: Option<String>,
    /// Must equal `password`
    #[serde(default, rename = "confirmPassword")]
    pub confirm_password: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
            confirm_password: request.confirm_password.unwrap_or_default(),
        }
    }
}

/// Sign-in request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SigninRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl From<SigninRequest> for Credentials {
    fn from(request: SigninRequest) -> Self {
        Self {
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
        }
    }
}

/// Plain acknowledgment
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Sign-in response carrying the bearer token
#[derive(Serialize, Debug)]
pub struct SigninResponse {
    pub msg: String,
    /// HS256 JWT; does not expire
    pub token: String,
}

/// Profile response (without the password hash)
#[derive(Serialize, Debug)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_reads_camel_case_confirmation() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "email": "ana@x.com",
            "password": "secret1",
            "confirmPassword": "secret1"
        }))
        .unwrap();
        assert_eq!(request.confirm_password.as_deref(), Some("secret1"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: SigninRequest = serde_json::from_str("{}").unwrap();
        let credentials = Credentials::from(request);
        assert!(credentials.email.is_empty());
        assert!(credentials.password.is_empty());
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "name": null,
            "email": "ana@x.com",
            "password": null,
            "confirmPassword": "secret1"
        }))
        .unwrap();
        let registration = Registration::from(request);
        assert!(registration.name.is_empty());
        assert_eq!(registration.email, "ana@x.com");
        assert!(registration.password.is_empty());
    }
}
