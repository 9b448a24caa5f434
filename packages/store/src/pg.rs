//! PostgreSQL-backed RecordStore.

use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{StoreError, UniqueField};
use crate::models::{Course, IrregularStudent, NewIrregularStudent, NewUser, Role, User};
use crate::repo::RecordStore;

/// Schema migrations, applied once at process start.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const USERS_EMAIL_KEY: &str = "users_email_key";
const USERS_USER_ID_KEY: &str = "users_user_id_key";

/// Row shape of the `users` table; the role is stored as text.
#[derive(FromRow)]
struct UserRow {
    user_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: String,
    comments: Vec<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        let role = self.role.parse().unwrap_or_else(|e| {
            tracing::warn!(user_id = self.user_id, "{}; treating as Student", e);
            Role::Student
        });
        User {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_hash: self.password_hash,
            role,
            comments: self.comments,
            created_at: self.created_at,
        }
    }
}

#[derive(FromRow)]
struct IrregularStudentRow {
    id: Uuid,
    student_id: String,
    user_id: String,
    level: i32,
    irregulars: bool,
    prevent_falling_behind_courses: Vec<String>,
    remaining_courses_from_past_levels: Vec<String>,
    courses_taken: Vec<String>,
    user_elective_choice: Vec<String>,
}

impl From<IrregularStudentRow> for IrregularStudent {
    fn from(row: IrregularStudentRow) -> Self {
        IrregularStudent {
            id: row.id,
            student_id: row.student_id,
            user_id: row.user_id,
            level: row.level,
            irregulars: row.irregulars,
            prevent_falling_behind_courses: row.prevent_falling_behind_courses,
            remaining_courses_from_past_levels: row.remaining_courses_from_past_levels,
            courses_taken: row.courses_taken,
            user_elective_choice: row.user_elective_choice,
        }
    }
}

const USER_COLUMNS: &str =
    "user_id, first_name, last_name, email, password_hash, role, comments, created_at";

const IRREGULAR_STUDENT_COLUMNS: &str = "id, student_id, user_id, level, irregulars, \
     prevent_falling_behind_courses, remaining_courses_from_past_levels, courses_taken, \
     user_elective_choice";

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Bring the schema up to date.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        MIGRATOR.run(&self.pool).await
    }
}

/// Translate unique-constraint violations into [`StoreError::Duplicate`].
fn classify_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some(USERS_EMAIL_KEY) => return StoreError::Duplicate(UniqueField::Email),
                Some(USERS_USER_ID_KEY) => return StoreError::Duplicate(UniqueField::UserId),
                _ => {}
            }
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl RecordStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(UserRow::into_user))
    }

    async fn max_user_id(&self) -> Result<Option<i64>, StoreError> {
        let max: Option<(i64,)> =
            sqlx::query_as("SELECT user_id FROM users ORDER BY user_id DESC LIMIT 1")
                .fetch_optional(&self.pool)
                .await?;
        Ok(max.map(|(id,)| id))
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let row: UserRow = sqlx::query_as(&format!(
            "INSERT INTO users (user_id, first_name, last_name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {USER_COLUMNS}"
        ))
        .bind(user.user_id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(classify_insert_error)?;
        Ok(row.into_user())
    }

    async fn list_irregular_students(&self) -> Result<Vec<IrregularStudent>, StoreError> {
        let rows: Vec<IrregularStudentRow> = sqlx::query_as(&format!(
            "SELECT {IRREGULAR_STUDENT_COLUMNS} FROM irregular_students \
             WHERE irregulars ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(IrregularStudent::from).collect())
    }

    async fn insert_irregular_student(
        &self,
        student: NewIrregularStudent,
    ) -> Result<IrregularStudent, StoreError> {
        let row: IrregularStudentRow = sqlx::query_as(&format!(
            "INSERT INTO irregular_students ({IRREGULAR_STUDENT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {IRREGULAR_STUDENT_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&student.student_id)
        .bind(&student.user_id)
        .bind(student.level)
        .bind(student.irregulars)
        .bind(&student.prevent_falling_behind_courses)
        .bind(&student.remaining_courses_from_past_levels)
        .bind(&student.courses_taken)
        .bind(&student.user_elective_choice)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn delete_irregular_student(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM irregular_students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        Ok(sqlx::query_as(
            "SELECT id, code, name, credit_hours, department FROM courses ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await?)
    }
}
