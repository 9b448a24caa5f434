//! # Registration: email uniqueness and sequential user identifiers
//!
//! A new account gets `user_id = max + 1`, or [`RegistrationOptions::seed_user_id`]
//! when no user exists yet. Reading the maximum and inserting are two separate
//! store calls, so two concurrent registrations can compute the same id. The
//! store rejects the second insert with [`UniqueField::UserId`] and this
//! service recomputes the id and tries again, up to
//! [`RegistrationOptions::id_retry_limit`] attempts in total.

use store::{NewUser, RecordStore, Role, StoreError, UniqueField};
use tracing::{info, warn};

use crate::auth::hash_password;
use crate::error::ApiError;
use crate::models::{RegisterRequest, UserInfo};

const SERVER_ERROR: &str = "Server error during registration";

/// How identifiers are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationOptions {
    /// Identifier of the very first user.
    pub seed_user_id: i64,
    /// Insert attempts before giving up on a contended identifier.
    pub id_retry_limit: u32,
}

impl Default for RegistrationOptions {
    fn default() -> Self {
        Self {
            seed_user_id: 1,
            id_retry_limit: 5,
        }
    }
}

/// A request that passed boundary validation.
#[derive(Debug)]
struct Registration {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    role: Role,
}

fn required(value: &str, field: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::Validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

/// Absent, empty and `"Student"` all select the default role.
pub fn parse_role(role: Option<&str>) -> Result<Role, ApiError> {
    match role.map(str::trim) {
        None | Some("") => Ok(Role::default()),
        Some(role) => role.parse().map_err(ApiError::Validation),
    }
}

fn validate(request: RegisterRequest) -> Result<Registration, ApiError> {
    let first_name = required(&request.first_name, "First_Name")?;
    let last_name = required(&request.last_name, "Last_Name")?;
    let email = required(&request.email, "Email")?;
    if request.password.is_empty() {
        return Err(ApiError::Validation("Password is required".to_string()));
    }
    let role = parse_role(request.role.as_deref())?;

    Ok(Registration {
        first_name,
        last_name,
        email,
        password: request.password,
        role,
    })
}

/// The identifier the next user would get.
pub async fn next_user_id(store: &dyn RecordStore, seed: i64) -> Result<i64, ApiError> {
    let max = store
        .max_user_id()
        .await
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?;
    match max {
        None => Ok(seed),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| ApiError::internal(SERVER_ERROR, format!("user id {max} is the last"))),
    }
}

/// Register a new user and return its public fields.
pub async fn register(
    store: &dyn RecordStore,
    options: &RegistrationOptions,
    request: RegisterRequest,
) -> Result<UserInfo, ApiError> {
    let registration = validate(request)?;

    let existing = store
        .find_user_by_email(&registration.email)
        .await
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?;
    if existing.is_some() {
        return Err(ApiError::Conflict);
    }

    let password_hash = hash_password(registration.password)
        .await
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?;

    let attempts = options.id_retry_limit.max(1);
    for attempt in 1..=attempts {
        let user_id = next_user_id(store, options.seed_user_id).await?;

        let new_user = NewUser {
            user_id,
            first_name: registration.first_name.clone(),
            last_name: registration.last_name.clone(),
            email: registration.email.clone(),
            password_hash: password_hash.clone(),
            role: registration.role,
        };

        match store.insert_user(new_user).await {
            Ok(user) => {
                info!(user_id = user.user_id, role = %user.role, "registered user");
                return Ok(UserInfo::from(&user));
            }
            Err(StoreError::Duplicate(UniqueField::UserId)) => {
                warn!(user_id, attempt, "user id taken by a concurrent registration");
            }
            Err(StoreError::Duplicate(UniqueField::Email)) => return Err(ApiError::Conflict),
            Err(e) => return Err(ApiError::internal(SERVER_ERROR, e)),
        }
    }

    Err(ApiError::internal(
        SERVER_ERROR,
        format!("no free user id after {attempts} attempts"),
    ))
}
