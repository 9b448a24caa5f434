use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{StoreError, UniqueField};
use crate::models::{Course, IrregularStudent, NewIrregularStudent, NewUser, User};
use crate::repo::RecordStore;

/// In-memory RecordStore for testing and local development.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: Arc<Mutex<Vec<User>>>,
    irregular_students: Arc<Mutex<Vec<IrregularStudent>>>,
    courses: Arc<Mutex<Vec<Course>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose catalog is already populated.
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(Mutex::new(courses)),
            ..Self::default()
        }
    }

    /// Number of stored users, regardless of role.
    pub fn user_count(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or(0)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|e| StoreError::Unavailable(e.to_string()))
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(lock(&self.users)?.iter().find(|u| u.email == email).cloned())
    }

    async fn max_user_id(&self) -> Result<Option<i64>, StoreError> {
        Ok(lock(&self.users)?.iter().map(|u| u.user_id).max())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = lock(&self.users)?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(UniqueField::Email));
        }
        if users.iter().any(|u| u.user_id == user.user_id) {
            return Err(StoreError::Duplicate(UniqueField::UserId));
        }
        let user = user.into_user(Utc::now());
        users.push(user.clone());
        Ok(user)
    }

    async fn list_irregular_students(&self) -> Result<Vec<IrregularStudent>, StoreError> {
        Ok(lock(&self.irregular_students)?
            .iter()
            .filter(|s| s.irregulars)
            .cloned()
            .collect())
    }

    async fn insert_irregular_student(
        &self,
        student: NewIrregularStudent,
    ) -> Result<IrregularStudent, StoreError> {
        let student = student.with_id(Uuid::new_v4());
        lock(&self.irregular_students)?.push(student.clone());
        Ok(student)
    }

    async fn delete_irregular_student(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut students = lock(&self.irregular_students)?;
        let before = students.len();
        students.retain(|s| s.id != id);
        Ok(students.len() != before)
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        let mut courses = lock(&self.courses)?.clone();
        courses.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(courses)
    }
}
