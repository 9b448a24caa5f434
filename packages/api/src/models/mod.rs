//! Wire models shared by the server and the client.

mod auth;
mod user;

use serde::{Deserialize, Serialize};

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use store::{Course, IrregularStudent, NewIrregularStudent, Role};
pub use user::UserInfo;

/// The `{"message": ...}` body used for errors and plain acknowledgements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
