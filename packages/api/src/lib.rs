//! # API crate: SmartSchedule backend services and their wire types
//!
//! The wire models are always compiled so the client crate can share them.
//! Everything else sits behind the `server` feature (on by default), which the
//! client disables.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | always | `UserInfo`, request/response bodies, re-exported record types |
//! | `auth` | `server` | Argon2id password hashing, the placeholder login token |
//! | `error` | `server` | `ApiError` and its HTTP mapping |
//! | `services` | `server` | Registration, authentication, irregular-student directory, course catalog |
//! | `routes` | `server` | The axum router exposing the services under `/api` |
//!
//! ## Endpoints
//!
//! - **Accounts**: `POST /api/register`, `POST /api/login`
//! - **Irregular students**: `GET`/`POST /api/irregular-students`, `DELETE /api/irregular-students/{id}`
//! - **Catalog**: `GET /api/courses`

pub mod models;

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
mod state;

pub use models::{
    LoginRequest, LoginResponse, Message, RegisterRequest, RegisterResponse, UserInfo,
};

#[cfg(feature = "server")]
pub use error::ApiError;
#[cfg(feature = "server")]
pub use routes::router;
#[cfg(feature = "server")]
pub use services::RegistrationOptions;
#[cfg(feature = "server")]
pub use state::AppState;
