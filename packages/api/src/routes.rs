//! # HTTP surface
//!
//! | Method & path | Handler | Success |
//! |---------------|---------|---------|
//! | `GET /` | [`index`] | 200 service info |
//! | `POST /api/register` | [`register`] | 201 `{message, user}` |
//! | `POST /api/login` | [`login`] | 200 `{message, user, token}` |
//! | `GET /api/irregular-students` | [`list_irregular_students`] | 200 list |
//! | `POST /api/irregular-students` | [`create_irregular_student`] | 201 stored record |
//! | `DELETE /api/irregular-students/{id}` | [`delete_irregular_student`] | 200 `{message}` |
//! | `GET /api/courses` | [`list_courses`] | 200 list |
//!
//! Failures are [`ApiError`]s and render as `{"message": ...}`. Malformed JSON
//! bodies are turned into [`ApiError::Validation`] rather than axum's plain-text
//! rejection.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use store::{Course, IrregularStudent, NewIrregularStudent};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, Message, RegisterRequest, RegisterResponse};
use crate::services::{authentication, catalog, directory, registration};
use crate::state::AppState;

const ENDPOINTS: &[&str] = &[
    "POST /api/register",
    "POST /api/login",
    "GET /api/irregular-students",
    "POST /api/irregular-students",
    "DELETE /api/irregular-students/{id}",
    "GET /api/courses",
];

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route(
            "/api/irregular-students",
            get(list_irregular_students).post(create_irregular_student),
        )
        .route("/api/irregular-students/{id}", delete(delete_irregular_student))
        .route("/api/courses", get(list_courses))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "SmartSchedule API is running",
        "endpoints": ENDPOINTS,
    }))
}

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(request) = payload?;
    let user = registration::register(state.store(), state.registration(), request).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(authentication::login(state.store(), request).await?))
}

pub async fn list_irregular_students(
    State(state): State<AppState>,
) -> Json<Vec<IrregularStudent>> {
    Json(directory::list(state.store()).await)
}

pub async fn create_irregular_student(
    State(state): State<AppState>,
    payload: Result<Json<NewIrregularStudent>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(student) = payload?;
    let stored = directory::create(state.store(), student).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn delete_irregular_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    directory::delete(state.store(), &id).await?;
    Ok(Json(Message::new("Irregular student deleted successfully")))
}

pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(catalog::list(state.store()).await?))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use store::{MemoryStore, NewUser, RecordStore, Role, StoreError, User};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::services::RegistrationOptions;

    /// Every operation fails as if the database were down.
    struct UnavailableStore;

    fn down<T>() -> Result<T, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    #[async_trait]
    impl RecordStore for UnavailableStore {
        async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
            down()
        }

        async fn max_user_id(&self) -> Result<Option<i64>, StoreError> {
            down()
        }

        async fn insert_user(&self, _user: NewUser) -> Result<User, StoreError> {
            down()
        }

        async fn list_irregular_students(&self) -> Result<Vec<IrregularStudent>, StoreError> {
            down()
        }

        async fn insert_irregular_student(
            &self,
            _student: NewIrregularStudent,
        ) -> Result<IrregularStudent, StoreError> {
            down()
        }

        async fn delete_irregular_student(&self, _id: Uuid) -> Result<bool, StoreError> {
            down()
        }

        async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
            down()
        }
    }

    fn unavailable_app() -> Router {
        router(AppState::new(Arc::new(UnavailableStore), RegistrationOptions::default()))
    }

    fn app(store: MemoryStore) -> Router {
        router(AppState::new(Arc::new(store), RegistrationOptions::default()))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn registration(email: &str) -> Value {
        json!({
            "First_Name": "Sara",
            "Last_Name": "Alotaibi",
            "Email": email,
            "Password": "12345",
        })
    }

    #[tokio::test]
    async fn test_index_lists_endpoints() {
        let app = app(MemoryStore::new());
        let (status, body) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["endpoints"].as_array().unwrap().len(), ENDPOINTS.len());
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let app = app(MemoryStore::new());

        let (status, body) =
            send(&app, Method::POST, "/api/register", Some(registration("sara@example.com"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["user"]["userID"], 1);
        assert_eq!(body["user"]["role"], "Student");
        assert!(body["user"].get("Password").is_none());

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/login",
            Some(json!({"Email": "sara@example.com", "Password": "12345"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token"], "dummy-token");
        assert_eq!(body["user"]["Email"], "sara@example.com");
        assert!(body["user"].get("Password").is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let store = MemoryStore::new();
        let app = app(store.clone());

        send(&app, Method::POST, "/api/register", Some(registration("sara@example.com"))).await;
        let (status, body) =
            send(&app, Method::POST, "/api/register", Some(registration("sara@example.com"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User already exists with this email");
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn test_register_with_role() {
        let app = app(MemoryStore::new());
        let mut body = registration("sched@example.com");
        body["role"] = json!("Scheduler");

        let (status, body) = send(&app, Method::POST, "/api/register", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["role"], Role::Scheduler.as_str());
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let app = app(MemoryStore::new());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/register")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_login_failures_are_identical() {
        let app = app(MemoryStore::new());
        send(&app, Method::POST, "/api/register", Some(registration("sara@example.com"))).await;

        let (wrong_status, wrong_body) = send(
            &app,
            Method::POST,
            "/api/login",
            Some(json!({"Email": "sara@example.com", "Password": "wrong"})),
        )
        .await;
        let (unknown_status, unknown_body) = send(
            &app,
            Method::POST,
            "/api/login",
            Some(json!({"Email": "ghost@example.com", "Password": "12345"})),
        )
        .await;

        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_body, unknown_body);
        assert_eq!(wrong_body["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_irregular_students_crud() {
        let app = app(MemoryStore::new());

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/irregular-students",
            Some(json!({
                "student_id": "441100",
                "user_id": "7",
                "level": 5,
                "courses_taken": ["CSC 111"],
                "irregulars": false,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["irregulars"], true);
        assert_eq!(created["prevent_falling_behind_courses"], json!([]));
        let id = created["_id"].as_str().unwrap().to_string();

        let (status, listed) = send(&app, Method::GET, "/api/irregular-students", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([created]));

        let uri = format!("/api/irregular-students/{id}");
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);

        // Deleting again still reports success
        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Irregular student deleted successfully");

        let (_, listed) = send(&app, Method::GET, "/api/irregular-students", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_irregular_student_requires_ids() {
        let app = app(MemoryStore::new());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/irregular-students",
            Some(json!({"level": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "student_id and user_id are required");
    }

    #[tokio::test]
    async fn test_courses() {
        let app = app(MemoryStore::with_courses(vec![Course::new(
            "CSC 111",
            "Computer Programming (1)",
            4,
            "Computer Science",
        )]));

        let (status, body) = send(&app, Method::GET, "/api/courses", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["code"], "CSC 111");
        assert_eq!(body[0]["credit_hours"], 4);
        assert!(body[0]["_id"].is_string());
    }

    #[tokio::test]
    async fn test_irregular_students_read_failure_is_empty_list() {
        let app = unavailable_app();
        let (status, body) = send(&app, Method::GET, "/api/irregular-students", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_store_failure_on_register_and_login() {
        let app = unavailable_app();

        let (status, body) =
            send(&app, Method::POST, "/api/register", Some(registration("sara@example.com"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Server error during registration"}));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/login",
            Some(json!({"Email": "sara@example.com", "Password": "12345"})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Server error during login"}));
    }

    #[tokio::test]
    async fn test_store_failure_on_writes_and_catalog() {
        let app = unavailable_app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/irregular-students",
            Some(json!({"student_id": "441100", "user_id": "7"})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].is_string());

        let uri = format!("/api/irregular-students/{}", Uuid::nil());
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, body) = send(&app, Method::GET, "/api/courses", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to fetch courses");
    }
}
