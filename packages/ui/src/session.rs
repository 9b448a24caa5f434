//! Client-side record of who is signed in.

use api::{LoginResponse, UserInfo};
use store::Role;

/// What the browser keeps after a successful login: the user and the
/// placeholder token. Nothing on the server checks the token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientSession {
    user: Option<UserInfo>,
    token: Option<String>,
}

impl ClientSession {
    pub fn sign_in(&mut self, response: &LoginResponse) {
        tracing::info!(user_id = response.user.user_id, "signed in");
        self.user = Some(response.user.clone());
        self.token = Some(response.token.clone());
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
