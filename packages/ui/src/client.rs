//! # Typed HTTP client for the SmartSchedule API
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] and maps each backend endpoint to
//! a method. A non-2xx reply becomes [`ClientError::Server`] carrying the
//! backend's `message` text, which is what the forms show in their alerts.
//!
//! The schedule generator is a separate service whose address is configured
//! with [`ApiClient::with_generator_url`]; only its reply envelope
//! (`success`, `schedule`, `error`) is interpreted.

use api::{LoginRequest, LoginResponse, Message, RegisterRequest, RegisterResponse};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use store::{Course, IrregularStudent, NewIrregularStudent};
use thiserror::Error;
use uuid::Uuid;

use crate::schedule::{GenerationRequest, GenerationResponse};

/// Where the backend listens during development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection error. Please check if the backend server is running.")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Server { status: StatusCode, message: String },

    #[error("{0}")]
    Validation(String),
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    generator_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    /// Client for a backend at `base_url` (no trailing `/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let generator_url = format!("{base_url}/generate-schedule");
        Self {
            http: reqwest::Client::new(),
            base_url,
            generator_url,
        }
    }

    /// Point schedule generation at another service.
    pub fn with_generator_url(mut self, url: impl Into<String>) -> Self {
        self.generator_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, ClientError> {
        let response = self.http.post(self.url("/register")).json(request).send().await?;
        decode(response).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(self.url("/login")).json(&request).send().await?;
        decode(response).await
    }

    pub async fn list_irregular_students(&self) -> Result<Vec<IrregularStudent>, ClientError> {
        let response = self.http.get(self.url("/irregular-students")).send().await?;
        decode(response).await
    }

    pub async fn add_irregular_student(
        &self,
        student: &NewIrregularStudent,
    ) -> Result<IrregularStudent, ClientError> {
        let response = self
            .http
            .post(self.url("/irregular-students"))
            .json(student)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_irregular_student(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/irregular-students/{id}")))
            .send()
            .await?;
        decode::<Message>(response).await?;
        Ok(())
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, ClientError> {
        let response = self.http.get(self.url("/courses")).send().await?;
        decode(response).await
    }

    pub async fn generate_schedule(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ClientError> {
        let response = self.http.post(&self.generator_url).json(request).send().await?;
        decode(response).await
    }
}

/// Parse a success body, or turn an error reply into [`ClientError::Server`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<Message>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    tracing::debug!(%status, "request rejected: {}", message);
    Err(ClientError::Server { status, message })
}
