//! Account Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── extract.rs  - JSON body extractor with JSON error rejections
//! ├── register.rs - User registration handler
//! ├── signin.rs   - User authentication handler
//! ├── delete.rs   - User deletion handler
//! └── profile.rs  - Profile lookup handler (token required)
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register
//! - **`signin`** - POST /auth/signin
//! - **`delete_user`** - DELETE /auth/delete/{id}
//! - **`get_profile`** - GET /user/{id}

/// Request and response types
pub mod types;

/// JSON body extractor
pub mod extract;

/// Register handler
pub mod register;

/// Sign-in handler
pub mod signin;

/// Delete handler
pub mod delete;

/// Profile handler
pub mod profile;

// Re-export commonly used types
pub use extract::JsonBody;
pub use types::{MessageResponse, ProfileResponse, RegisterRequest, SigninRequest, SigninResponse};

// Re-export handlers
pub use delete::delete_user;
pub use profile::get_profile;
pub use register::register;
pub use signin::signin;
