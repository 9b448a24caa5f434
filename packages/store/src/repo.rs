//! # Record store: the persistence seam of SmartSchedule
//!
//! Every service in the `api` crate talks to persistence through the
//! [`RecordStore`] trait, so the same logic runs against the in-memory store
//! (tests, local development) or PostgreSQL (production).
//!
//! ## Users
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`find_user_by_email`](RecordStore::find_user_by_email) | Exact, case-sensitive email match. |
//! | [`max_user_id`](RecordStore::max_user_id) | The highest assigned `user_id`, or `None` for an empty collection. |
//! | [`insert_user`](RecordStore::insert_user) | Inserts atomically, rejecting a taken email or `user_id` with [`StoreError::Duplicate`]. |
//!
//! The uniqueness check on insert is what makes read-max-then-insert safe:
//! two registrations that read the same maximum cannot both succeed, and the
//! loser learns which field collided so it can retry with a fresh identifier.
//!
//! ## Irregular students and courses
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`list_irregular_students`](RecordStore::list_irregular_students) | Records whose `irregulars` flag is set. |
//! | [`insert_irregular_student`](RecordStore::insert_irregular_student) | Stores the record under a fresh UUID. |
//! | [`delete_irregular_student`](RecordStore::delete_irregular_student) | Returns whether anything was deleted. |
//! | [`list_courses`](RecordStore::list_courses) | The whole catalog ordered by course code. |

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Course, IrregularStudent, NewIrregularStudent, NewUser, User};

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn max_user_id(&self) -> Result<Option<i64>, StoreError>;

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn list_irregular_students(&self) -> Result<Vec<IrregularStudent>, StoreError>;

    async fn insert_irregular_student(
        &self,
        student: NewIrregularStudent,
    ) -> Result<IrregularStudent, StoreError>;

    async fn delete_irregular_student(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list_courses(&self) -> Result<Vec<Course>, StoreError>;
}
