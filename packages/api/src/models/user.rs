//! # Client-safe user projection
//!
//! [`store::User`] is the complete record, password hash included. It never
//! crosses the HTTP boundary; [`UserInfo`] does. The field names on the wire
//! (`userID`, `First_Name`, ...) are the ones the client forms already use.

use serde::{Deserialize, Deserializer, Serialize};
use store::{Role, User};

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    /// Missing, null or unrecognized roles read as [`Role::Student`].
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Role,
}

fn lenient_role<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::parse::<Role>) {
        Some(Ok(role)) => role,
        Some(Err(e)) => {
            tracing::warn!("{}; treating as Student", e);
            Role::Student
        }
        None => Role::Student,
    })
}

impl UserInfo {
    /// "First Last", as shown in dashboard headers.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            user_id: user.user_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}
