//! Authentication Module
//!
//! This module handles credential hashing, token issuance and verification,
//! account operations, and the HTTP handlers built on them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT issuance and verification
//! ├── users.rs        - User model, UserStore trait, PostgreSQL store
//! ├── memory.rs       - In-memory UserStore
//! ├── accounts.rs     - Register, authenticate, delete, fetch profile
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and matching passwords → user stored with a bcrypt hash
//! 2. **Sign in**: email and password verified → token returned
//! 3. **Profile**: token verified by the access gate → public user fields returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt at cost 12
//! - Tokens are HS256 JWTs carrying only the user id, with no expiry
//! - The signing secret is passed explicitly, never read from a global

/// bcrypt password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User data model and persistence
pub mod users;

/// In-memory user store
pub mod memory;

/// Account operations
pub mod accounts;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use accounts::{Accounts, Credentials, Registration};
pub use handlers::{delete_user, get_profile, register, signin};
pub use memory::MemoryUserStore;
pub use password::{PasswordHasher, PASSWORD_COST};
pub use sessions::{issue_token, verify_token, Claims, SigningSecret, TokenError};
pub use users::{NewUser, PgUserStore, StoreError, User, UserProfile, UserStore};
