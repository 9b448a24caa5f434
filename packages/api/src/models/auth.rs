//! Request and response bodies of the registration and login endpoints.

use serde::{Deserialize, Serialize};

use super::UserInfo;

/// Body of `POST /api/register`. Missing fields deserialize as empty and are
/// rejected by the registration service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    #[serde(rename = "First_Name", default)]
    pub first_name: String,
    #[serde(rename = "Last_Name", default)]
    pub last_name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Password", default)]
    pub password: String,
    /// Absent, empty and `"Student"` all mean [`store::Role::Student`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserInfo,
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Password", default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserInfo,
    /// Placeholder credential; nothing verifies it.
    pub token: String,
}
