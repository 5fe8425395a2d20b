//! Session keys and password authentication support.

/// Session key under which the authenticated user's id is stored.
pub const SESSION_USER_ID_KEY: &str = "user_id";

#[cfg(feature = "server")]
mod password;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password, PasswordError};
