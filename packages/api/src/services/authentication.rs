//! Email + password login.

use store::RecordStore;
use tracing::{info, warn};

use crate::auth::{burn_verification, verify_password, PLACEHOLDER_TOKEN};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, UserInfo};

const SERVER_ERROR: &str = "Server error during login";

/// Check the credentials and hand back the public user plus the placeholder token.
///
/// An unknown email and a wrong password both yield [`ApiError::Unauthorized`],
/// and both pay for one Argon2 verification.
pub async fn login(
    store: &dyn RecordStore,
    request: LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let email = request.email.trim();

    let user = store
        .find_user_by_email(email)
        .await
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?;

    let Some(user) = user else {
        burn_verification(request.password).await;
        warn!("login rejected: unknown email");
        return Err(ApiError::Unauthorized);
    };

    let valid = verify_password(request.password, user.password_hash.clone())
        .await
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?;

    if !valid {
        warn!(user_id = user.user_id, "login rejected: wrong password");
        return Err(ApiError::Unauthorized);
    }

    info!(user_id = user.user_id, "user logged in");
    Ok(LoginResponse {
        message: "Login successful".to_string(),
        user: UserInfo::from(&user),
        token: PLACEHOLDER_TOKEN.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use store::{MemoryStore, Role};

    use super::*;
    use crate::models::RegisterRequest;
    use crate::services::registration::{register, RegistrationOptions};

    async fn store_with_user(role: Option<&str>) -> MemoryStore {
        let store = MemoryStore::new();
        register(
            &store,
            &RegistrationOptions::default(),
            RegisterRequest {
                first_name: "Sara".to_string(),
                last_name: "Alotaibi".to_string(),
                email: "sara@example.com".to_string(),
                password: "12345".to_string(),
                role: role.map(str::to_string),
            },
        )
        .await
        .unwrap();
        store
    }

    fn credentials(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let store = store_with_user(None).await;

        let response = login(&store, credentials("sara@example.com", "12345")).await.unwrap();
        assert_eq!(response.token, "dummy-token");
        assert_eq!(response.user.user_id, 1);
        assert_eq!(response.user.role, Role::Student);

        // Never leaks the credential
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["user"].get("Password").is_none());
        assert!(json["user"].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_login_keeps_role() {
        let store = store_with_user(Some("LoadCommittee")).await;

        let response = login(&store, credentials("sara@example.com", "12345")).await.unwrap();
        assert_eq!(response.user.role, Role::LoadCommittee);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_alike() {
        let store = store_with_user(None).await;

        let wrong_password = login(&store, credentials("sara@example.com", "nope"))
            .await
            .unwrap_err();
        let unknown_email = login(&store, credentials("nobody@example.com", "12345"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, ApiError::Unauthorized));
        assert!(matches!(unknown_email, ApiError::Unauthorized));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }
}
