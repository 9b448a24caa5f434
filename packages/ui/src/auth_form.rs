//! # Login / registration form
//!
//! [`AuthForm`] is the state behind the two-tab auth page. Submitting talks to
//! the backend through [`ApiClient`]; everything time-based (alert expiry, the
//! delayed redirect after login, the delayed switch back to the login tab
//! after registering) is driven by [`AuthForm::tick`] with the caller's clock.

use std::time::{Duration, Instant};

use api::RegisterRequest;
use store::Role;

use crate::alert::AlertSlot;
use crate::client::{ApiClient, ClientError};
use crate::routes::dashboard_route;
use crate::session::ClientSession;

pub const MIN_PASSWORD_LEN: usize = 4;
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);
pub const SWITCH_TO_LOGIN_DELAY: Duration = Duration::from_secs(2);

/// Client-side length check; the server accepts any non-empty password.
pub fn check_password(password: &str) -> Result<(), ClientError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ClientError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterFields {
    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: Some(self.role.as_str().to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Pending {
    Redirect { route: &'static str, at: Instant },
    SwitchToLogin { at: Instant },
}

#[derive(Debug, Default)]
pub struct AuthForm {
    pub tab: AuthTab,
    pub login: LoginFields,
    pub register: RegisterFields,
    pub alert: AlertSlot,
    pub session: ClientSession,
    loading: bool,
    pending: Option<Pending>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Changing tabs always clears the alert.
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.alert.clear();
    }

    pub async fn submit_login(&mut self, client: &ApiClient, now: Instant) {
        self.loading = true;
        let result = client.login(&self.login.email, &self.login.password).await;
        self.loading = false;

        match result {
            Ok(response) => {
                self.session.sign_in(&response);
                self.alert.success("Login successful! Redirecting...", now);
                self.pending = Some(Pending::Redirect {
                    route: dashboard_route(response.user.role),
                    at: now + REDIRECT_DELAY,
                });
            }
            Err(err) => self.alert.danger(err.to_string(), now),
        }
    }

    pub async fn submit_register(&mut self, client: &ApiClient, now: Instant) {
        if let Err(err) = check_password(&self.register.password) {
            self.alert.danger(err.to_string(), now);
            return;
        }

        self.loading = true;
        let result = client.register(&self.register.to_request()).await;
        self.loading = false;

        match result {
            Ok(_) => {
                self.alert.success("Registration successful! Please login.", now);
                self.register = RegisterFields::default();
                self.pending = Some(Pending::SwitchToLogin {
                    at: now + SWITCH_TO_LOGIN_DELAY,
                });
            }
            Err(err) => self.alert.danger(err.to_string(), now),
        }
    }

    /// Advance timers. Returns the route to navigate to once the post-login
    /// delay has passed.
    pub fn tick(&mut self, now: Instant) -> Option<&'static str> {
        self.alert.tick(now);

        match self.pending {
            Some(Pending::Redirect { route, at }) if now >= at => {
                self.pending = None;
                Some(route)
            }
            Some(Pending::SwitchToLogin { at }) if now >= at => {
                // The success alert stays up for its full lifetime.
                self.pending = None;
                self.tab = AuthTab::Login;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use store::MemoryStore;

    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::alert::{AlertKind, ALERT_TTL};
    use crate::testing::{serve, spawn_backend};

    fn filled_register(email: &str, password: &str, role: Role) -> RegisterFields {
        RegisterFields {
            first_name: "Sara".to_string(),
            last_name: "Alotaibi".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }

    #[test]
    fn test_check_password() {
        assert!(check_password("abcd").is_ok());
        assert!(matches!(check_password("abc"), Err(ClientError::Validation(_))));
        assert!(check_password("").is_err());
    }

    #[test]
    fn test_switch_tab_clears_alert() {
        let mut form = AuthForm::new();
        form.alert.danger("Invalid email or password", Instant::now());

        form.switch_tab(AuthTab::Register);
        assert_eq!(form.tab, AuthTab::Register);
        assert!(form.alert.current().is_none());
    }

    #[tokio::test]
    async fn test_short_password_never_reaches_server() {
        let store = MemoryStore::new();
        let client = spawn_backend(store.clone()).await;
        let mut form = AuthForm::new();
        form.switch_tab(AuthTab::Register);
        form.register = filled_register("sara@example.com", "123", Role::Student);

        form.submit_register(&client, Instant::now()).await;

        assert_eq!(form.alert.message(), Some("Password must be at least 4 characters"));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn test_register_then_login_redirects_by_role() {
        let client = spawn_backend(MemoryStore::new()).await;
        let start = Instant::now();
        let mut form = AuthForm::new();

        form.switch_tab(AuthTab::Register);
        form.register = filled_register("sched@example.com", "1234", Role::Scheduler);
        form.submit_register(&client, start).await;

        assert_eq!(form.alert.kind(), Some(AlertKind::Success));
        assert_eq!(form.register, RegisterFields::default());
        assert_eq!(form.tick(start + Duration::from_secs(1)), None);
        assert_eq!(form.tab, AuthTab::Register);
        form.tick(start + SWITCH_TO_LOGIN_DELAY);
        assert_eq!(form.tab, AuthTab::Login);
        assert_eq!(form.alert.message(), Some("Registration successful! Please login."));
        form.tick(start + ALERT_TTL);
        assert!(form.alert.current().is_none());

        let start = Instant::now();
        form.login = LoginFields {
            email: "sched@example.com".to_string(),
            password: "1234".to_string(),
        };
        form.submit_login(&client, start).await;

        assert!(form.session.is_signed_in());
        assert_eq!(form.alert.message(), Some("Login successful! Redirecting..."));
        assert_eq!(form.tick(start + Duration::from_secs(1)), None);
        assert_eq!(form.tick(start + REDIRECT_DELAY), Some("/scheduling-committee"));
        assert_eq!(form.tick(start + Duration::from_secs(3)), None);
    }

    #[tokio::test]
    async fn test_failed_login_shows_server_message() {
        let client = spawn_backend(MemoryStore::new()).await;
        let mut form = AuthForm::new();
        form.login = LoginFields {
            email: "ghost@example.com".to_string(),
            password: "1234".to_string(),
        };

        let now = Instant::now();
        form.submit_login(&client, now).await;

        assert_eq!(form.alert.kind(), Some(AlertKind::Danger));
        assert_eq!(form.alert.message(), Some("Invalid email or password"));
        assert!(!form.session.is_signed_in());
        assert_eq!(form.tick(now + Duration::from_secs(10)), None);
        assert!(form.alert.current().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_form() {
        let client = spawn_backend(MemoryStore::new()).await;
        let mut form = AuthForm::new();
        let fields = filled_register("sara@example.com", "abcd", Role::Student);

        form.register = fields.clone();
        form.submit_register(&client, Instant::now()).await;
        form.register = fields.clone();
        form.submit_register(&client, Instant::now()).await;

        assert_eq!(form.alert.message(), Some("User already exists with this email"));
        assert_eq!(form.register, fields);
    }

    #[tokio::test]
    async fn test_unrecognized_role_redirects_to_student_dashboard() {
        async fn login(Json(_): Json<Value>) -> Json<Value> {
            Json(json!({
                "message": "Login successful",
                "user": {
                    "userID": 9,
                    "First_Name": "Lina",
                    "Last_Name": "Harbi",
                    "Email": "lina@example.com",
                    "role": "Admin",
                },
                "token": "dummy-token",
            }))
        }
        let base = serve(Router::new().route("/api/login", post(login))).await;
        let client = ApiClient::new(base);
        let mut form = AuthForm::new();
        form.login = LoginFields {
            email: "lina@example.com".to_string(),
            password: "1234".to_string(),
        };

        let start = Instant::now();
        form.submit_login(&client, start).await;

        assert!(form.session.is_signed_in());
        assert_eq!(form.session.role(), Some(Role::Student));
        assert_eq!(form.tick(start + REDIRECT_DELAY), Some("/student-dashboard"));
    }
}
