//! # Schedule display data and the generator envelope
//!
//! No schedule is computed anywhere in SmartSchedule. The dashboard shows a
//! fixed sample timetable for level 3 and hands generation off to an external
//! service; [`GenerationRequest`] is the input that service is sent and
//! [`GenerationResponse`] the part of its reply the client understands.

use serde::{Deserialize, Serialize};

/// Weekdays with teaching slots.
pub const DAYS: [&str; 5] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];

/// One section's weekly timetable: the course in each slot, per day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub name: &'static str,
    pub days: &'static [(&'static str, &'static [&'static str])],
}

impl Section {
    /// Slots for `day`, or an empty slice on a day off.
    pub fn slots(&self, day: &str) -> &'static [&'static str] {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, slots)| *slots)
            .unwrap_or(&[])
    }
}

/// Sunday, Tuesday and Thursday share the same lecture layout.
static LECTURE_DAY: &[&str] = &[
    "PHYS 103",
    "PHYS 103",
    "MATH 106",
    "MATH 106",
    "BREAK",
    "BREAK",
    "MATH 151",
];

static LEVEL_3: &[Section] = &[Section {
    name: "Section 1",
    days: &[
        ("Sunday", LECTURE_DAY),
        (
            "Monday",
            &[
                "PHYS 103 Lab",
                "PHYS 103 Lab",
                "MATH 106 Tut",
                "MATH 106 Tut",
                "BREAK",
                "BREAK",
                "IC 105",
            ],
        ),
        ("Tuesday", LECTURE_DAY),
        (
            "Wednesday",
            &[
                "IC 105",
                "IC 105",
                "MATH 151 Tut",
                "MATH 151 Tut",
                "BREAK",
                "BREAK",
                "CSC 111 Lab",
            ],
        ),
        ("Thursday", LECTURE_DAY),
    ],
}];

/// The sample timetable for `level`. Only level 3 has one.
pub fn sample_schedule(level: i32) -> Option<&'static [Section]> {
    match level {
        3 => Some(LEVEL_3),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    /// Weekly slots the subject needs.
    pub duration: u32,
}

/// Input posted to the external schedule generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub days: u32,
    pub slots_per_day: u32,
    pub subjects: Vec<Subject>,
    pub level: i32,
}

impl GenerationRequest {
    /// The fixed subject load the dashboard sends for any level.
    pub fn for_level(level: i32) -> Self {
        let subjects = [
            ("Math 106", 5),
            ("Phy 103", 5),
            ("Math 151", 5),
            ("CSC 111", 5),
            ("MBI 140", 4),
            ("IC 106", 2),
        ]
        .into_iter()
        .map(|(name, duration)| Subject {
            name: name.to_string(),
            duration,
        })
        .collect();

        Self {
            days: 5,
            slots_per_day: 8,
            subjects,
            level,
        }
    }
}

/// The generator's reply. The schedule body itself is opaque.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub schedule: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn succeeded(&self) -> bool {
        self.success && self.schedule.is_some()
    }
}
