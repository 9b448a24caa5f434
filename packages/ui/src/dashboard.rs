//! # Scheduling committee dashboard
//!
//! State behind the committee page: which level's timetable is on screen,
//! the level picked for generation, the edit toggle, and the form for adding
//! an irregular student. Backend calls go through [`ApiClient`] and every
//! outcome lands in the dashboard's [`AlertSlot`].

use std::ops::RangeInclusive;
use std::time::Instant;

use store::{Course, IrregularStudent, NewIrregularStudent};

use crate::alert::AlertSlot;
use crate::client::ApiClient;
use crate::schedule::{sample_schedule, GenerationRequest, Section};

/// Academic levels the committee schedules.
pub const LEVELS: RangeInclusive<i32> = 3..=8;
pub const DEFAULT_LEVEL: i32 = 3;

/// Course lists on the add-irregular form that are edited by ticking codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseList {
    PreventFallingBehind,
    RemainingFromPastLevels,
    Taken,
    ElectiveChoice,
}

#[derive(Debug)]
pub struct CommitteeDashboard {
    viewing_level: i32,
    generation_level: Option<i32>,
    editing: bool,
    pub form: NewIrregularStudent,
    pub irregular_students: Vec<IrregularStudent>,
    pub courses: Vec<Course>,
    pub generated: Option<serde_json::Value>,
    pub alert: AlertSlot,
}

impl Default for CommitteeDashboard {
    fn default() -> Self {
        Self {
            viewing_level: DEFAULT_LEVEL,
            generation_level: None,
            editing: false,
            form: NewIrregularStudent::default(),
            irregular_students: Vec::new(),
            courses: Vec::new(),
            generated: None,
            alert: AlertSlot::default(),
        }
    }
}

impl CommitteeDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewing_level(&self) -> i32 {
        self.viewing_level
    }

    /// Returns false and leaves the view alone for a level outside [`LEVELS`].
    pub fn view_level(&mut self, level: i32) -> bool {
        if !LEVELS.contains(&level) {
            return false;
        }
        self.viewing_level = level;
        true
    }

    /// The timetable for the level on screen, if one exists.
    pub fn visible_schedule(&self) -> Option<&'static [Section]> {
        sample_schedule(self.viewing_level)
    }

    pub fn generation_level(&self) -> Option<i32> {
        self.generation_level
    }

    pub fn select_generation_level(&mut self, level: i32) -> bool {
        if !LEVELS.contains(&level) {
            return false;
        }
        self.generation_level = Some(level);
        true
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn toggle_editing(&mut self, now: Instant) {
        self.editing = !self.editing;
        if self.editing {
            self.alert
                .success("Editing mode enabled. Click on any course cell to edit.", now);
        } else {
            self.alert.success("Changes saved successfully!", now);
        }
    }

    /// Confirmation only; nothing is sent anywhere.
    pub fn publish(&mut self, now: Instant) {
        self.alert.success(
            "Schedule published successfully! Students can now view the updated schedule.",
            now,
        );
    }

    /// Tick `code` on `list` if absent, untick it if present.
    pub fn toggle_course(&mut self, list: CourseList, code: &str) {
        let codes = match list {
            CourseList::PreventFallingBehind => &mut self.form.prevent_falling_behind_courses,
            CourseList::RemainingFromPastLevels => {
                &mut self.form.remaining_courses_from_past_levels
            }
            CourseList::Taken => &mut self.form.courses_taken,
            CourseList::ElectiveChoice => &mut self.form.user_elective_choice,
        };
        if let Some(pos) = codes.iter().position(|c| c == code) {
            codes.remove(pos);
        } else {
            codes.push(code.to_string());
        }
    }

    /// Reload the irregular-student list and the catalog. Each list is
    /// fetched on its own and emptied if its fetch fails.
    pub async fn refresh(&mut self, client: &ApiClient) {
        self.reload_irregulars(client).await;
        self.courses = client.list_courses().await.unwrap_or_else(|err| {
            tracing::error!("failed to fetch courses: {}", err);
            Vec::new()
        });
    }

    pub async fn add_irregular(&mut self, client: &ApiClient, now: Instant) {
        if self.form.student_id.trim().is_empty() || self.form.user_id.trim().is_empty() {
            self.alert.danger("Please fill in Student ID and User ID", now);
            return;
        }

        match client.add_irregular_student(&self.form).await {
            Ok(_) => {
                self.alert.success("Irregular student added successfully!", now);
                self.form = NewIrregularStudent::default();
                self.reload_irregulars(client).await;
            }
            Err(err) => {
                tracing::warn!("adding irregular student failed: {}", err);
                self.alert.danger("Failed to add irregular student", now);
            }
        }
    }

    pub async fn delete_irregular(
        &mut self,
        client: &ApiClient,
        student: &IrregularStudent,
        now: Instant,
    ) {
        match client.delete_irregular_student(student.id).await {
            Ok(()) => {
                self.alert.success("Irregular student deleted successfully!", now);
                self.reload_irregulars(client).await;
            }
            Err(err) => {
                tracing::warn!(id = %student.id, "deleting irregular student failed: {}", err);
                self.alert.danger("Failed to delete irregular student", now);
            }
        }
    }

    async fn reload_irregulars(&mut self, client: &ApiClient) {
        self.irregular_students = client.list_irregular_students().await.unwrap_or_else(|err| {
            tracing::error!("failed to fetch irregular students: {}", err);
            Vec::new()
        });
    }

    /// Ask the external generator for a schedule at the selected level.
    pub async fn generate(&mut self, client: &ApiClient, now: Instant) {
        let Some(level) = self.generation_level else {
            self.alert.danger("Please select an academic level first", now);
            return;
        };

        match client.generate_schedule(&GenerationRequest::for_level(level)).await {
            Ok(reply) if reply.succeeded() => {
                self.generated = reply.schedule;
                self.alert.success(
                    format!("Schedule generated successfully for Level {level}!"),
                    now,
                );
            }
            Ok(reply) => {
                let reason = reply.error.as_deref().unwrap_or("Unknown error");
                self.alert.danger(format!("Backend error: {reason}"), now);
            }
            Err(err) => {
                tracing::error!(level, "schedule generation failed: {}", err);
                self.alert
                    .danger("Error generating schedule. Backend may not be running.", now);
            }
        }
    }
}
