//! Credential handling for the local email + password accounts.

mod password;

pub use password::{burn_verification, hash_password, verify_password, PasswordError};

/// Token handed out on every successful login. Nothing checks it.
pub const PLACEHOLDER_TOKEN: &str = "dummy-token";
