//! # Password hashing and verification: Argon2id
//!
//! - [`hash_password`] salts with [`OsRng`] and hashes with the default
//!   Argon2id parameters, returning a PHC-format string
//!   (`$argon2id$v=19$m=19456,t=2,p=1$...`) for the `password_hash` column.
//! - [`verify_password`] checks a plaintext against a stored PHC string.
//!   Returns `Ok(false)` on mismatch and `Err` if the stored hash is malformed.
//! - [`burn_verification`] runs a verification against a throwaway hash so a
//!   login for an unknown email costs as much as one with a wrong password.
//!
//! All three run on tokio's blocking thread pool.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("invalid password hash: {0}")]
    Malformed(String),

    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

fn hash_blocking(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

fn verify_blocking(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| PasswordError::Malformed(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Hash a password using Argon2id. Returns a PHC-format string.
pub async fn hash_password(password: String) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_blocking(&password)).await?
}

/// Verify a password against a PHC-format hash string.
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_blocking(&password, &hash)).await?
}

/// Spend one verification's worth of work on a password that cannot match.
pub async fn burn_verification(password: String) {
    let outcome = tokio::task::spawn_blocking(move || {
        static DECOY: OnceLock<String> = OnceLock::new();
        let decoy = DECOY.get_or_init(|| hash_blocking("decoy").unwrap_or_default());
        verify_blocking(&password, decoy)
    })
    .await;
    if let Ok(Err(e)) = outcome {
        tracing::debug!("decoy verification failed: {}", e);
    }
}
