//! # UI crate: client-side state for the SmartSchedule web app
//!
//! Rendering is left to whatever front end embeds this crate. What lives here
//! is the behavior behind the pages: the typed HTTP client, the signed-in
//! session, role routing, and the state machines for the auth page and the
//! scheduling committee dashboard.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient` over reqwest, `ClientError` |
//! | [`session`] | `ClientSession`, the stored user and token |
//! | [`routes`] | Role to dashboard path |
//! | [`alert`] | Single self-expiring alert |
//! | [`auth_form`] | Login / register tabs |
//! | [`dashboard`] | Committee dashboard |
//! | [`schedule`] | Sample timetable, generator request and reply |

pub mod alert;
pub mod auth_form;
pub mod client;
pub mod dashboard;
pub mod routes;
pub mod schedule;
pub mod session;

pub use alert::{Alert, AlertKind, AlertSlot};
pub use auth_form::{AuthForm, AuthTab, LoginFields, RegisterFields};
pub use client::{ApiClient, ClientError};
pub use dashboard::{CommitteeDashboard, CourseList};
pub use routes::dashboard_route;
pub use schedule::{GenerationRequest, GenerationResponse, Section};
pub use session::ClientSession;
