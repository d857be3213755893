//! Common test utilities and helpers
//!
//! - Test server construction over the in-memory store
//! - Authentication helpers (registration, sign-in, headers)
//! - Assertion helpers for JSON error bodies

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;

pub use auth_helpers::*;
