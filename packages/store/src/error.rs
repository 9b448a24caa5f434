//! Errors reported by record store backends.

use std::fmt;

use thiserror::Error;

/// A field the store keeps unique across all users.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    UserId,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Email => f.write_str("email"),
            UniqueField::UserId => f.write_str("user id"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert collided with an existing record on a unique field.
    #[error("a user with this {0} already exists")]
    Duplicate(UniqueField),

    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("record store unavailable: {0}")]
    Unavailable(String),
}
