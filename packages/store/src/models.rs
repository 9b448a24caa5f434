//! # Record types held by the store
//!
//! These are the three collections SmartSchedule persists. They are
//! `Serialize + Deserialize` so that the directory and catalog records can be
//! sent to the client as-is; the [`User`] record is the exception, since it
//! carries the password hash and is only ever exposed through the `api`
//! crate's `UserInfo` projection.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A registered account with its sequential `user_id` and [`Role`]. |
//! | [`NewUser`] | The fields the registration service hands to the store. |
//! | [`IrregularStudent`] | A student who does not follow the standard per-level course sequence. |
//! | [`NewIrregularStudent`] | The body accepted when adding an irregular student. |
//! | [`Course`] | A catalog entry, read-only from this system's perspective. |

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a user does in the department; decides which dashboard they land on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Student,
    Faculty,
    Scheduler,
    LoadCommittee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
            Role::Scheduler => "Scheduler",
            Role::LoadCommittee => "LoadCommittee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Student" => Ok(Role::Student),
            "Faculty" => Ok(Role::Faculty),
            "Scheduler" => Ok(Role::Scheduler),
            "LoadCommittee" => Ok(Role::LoadCommittee),
            _ => Err(format!("{:?} is not a valid role", s)),
        }
    }
}

/// Full user record.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub role: Role,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A user about to be inserted. The comment list always starts empty.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewUser {
    /// Finish the record as the store would persist it.
    pub fn into_user(self, created_at: DateTime<Utc>) -> User {
        User {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            comments: Vec::new(),
            created_at,
        }
    }
}

/// A student tracked with per-student course overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IrregularStudent {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub student_id: String,
    pub user_id: String,
    pub level: i32,
    /// Always true for records created through the directory.
    pub irregulars: bool,
    /// Courses to prioritise so the student does not fall further behind.
    pub prevent_falling_behind_courses: Vec<String>,
    /// Courses carried over from earlier levels.
    pub remaining_courses_from_past_levels: Vec<String>,
    pub courses_taken: Vec<String>,
    pub user_elective_choice: Vec<String>,
}

/// Body accepted when adding an irregular student. Course lists may be omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewIrregularStudent {
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub irregulars: bool,
    #[serde(default)]
    pub prevent_falling_behind_courses: Vec<String>,
    #[serde(default)]
    pub remaining_courses_from_past_levels: Vec<String>,
    #[serde(default)]
    pub courses_taken: Vec<String>,
    #[serde(default)]
    pub user_elective_choice: Vec<String>,
}

/// The first level the committee schedules.
pub fn default_level() -> i32 {
    3
}

impl Default for NewIrregularStudent {
    fn default() -> Self {
        Self {
            student_id: String::new(),
            user_id: String::new(),
            level: default_level(),
            irregulars: false,
            prevent_falling_behind_courses: Vec::new(),
            remaining_courses_from_past_levels: Vec::new(),
            courses_taken: Vec::new(),
            user_elective_choice: Vec::new(),
        }
    }
}

impl NewIrregularStudent {
    /// Attach a store-generated identifier.
    pub fn with_id(self, id: Uuid) -> IrregularStudent {
        IrregularStudent {
            id,
            student_id: self.student_id,
            user_id: self.user_id,
            level: self.level,
            irregulars: self.irregulars,
            prevent_falling_behind_courses: self.prevent_falling_behind_courses,
            remaining_courses_from_past_levels: self.remaining_courses_from_past_levels,
            courses_taken: self.courses_taken,
            user_elective_choice: self.user_elective_choice,
        }
    }
}

/// A catalog course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub credit_hours: i32,
    pub department: String,
}

impl Course {
    pub fn new(code: &str, name: &str, credit_hours: i32, department: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: name.to_string(),
            credit_hours,
            department: department.to_string(),
        }
    }
}
