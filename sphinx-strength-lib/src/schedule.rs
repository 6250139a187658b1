//src/schedule.rs
use crate::dates::{add_days, date_key};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How far the sample rotation extends on either side of its anchor date.
pub const SAMPLE_HORIZON_DAYS: i64 = 14;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Display string for the set scheme, e.g. "4 x 6-8" or "3 x 12 each".
    pub sets: String,
    #[serde(default)]
    pub target_muscle: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDay {
    pub id: String,
    pub name: String,
    pub exercises: Vec<Exercise>,
    /// Hex color for theming, e.g. "#22d3ee".
    pub color: String,
    #[serde(default)]
    pub is_rest_day: bool,
}

/// One card of the visible 3-day window. Derived, never stored: recomputed
/// whenever the center or selected date changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day_of_week: &'static str,
    pub day_number: u32,
    pub is_today: bool,
    pub is_selected: bool,
    pub workout: Option<WorkoutDay>,
}

// Closed set of card presentation states, resolved once per render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayVariant {
    Selected,
    Today,
    Default,
}

impl CalendarDay {
    pub fn variant(&self) -> DayVariant {
        if self.is_selected {
            DayVariant::Selected
        } else if self.is_today {
            DayVariant::Today
        } else {
            DayVariant::Default
        }
    }
}

/// Caller-owned mapping from canonical date key to the workout planned for
/// that day. The calendar unit only ever reads it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutSchedule {
    days: HashMap<String, WorkoutDay>,
}

impl WorkoutSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workout_for(&self, date: NaiveDate) -> Option<&WorkoutDay> {
        self.days.get(&date_key(date))
    }

    pub fn assign(&mut self, date: NaiveDate, workout: WorkoutDay) {
        self.days.insert(date_key(date), workout);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sample plan used when the caller supplies no schedule of its own.
    pub fn sample() -> Self {
        Self::sample_around(Utc::now().date_naive())
    }

    /// Populates the 6-workout rotation over `anchor` ± `SAMPLE_HORIZON_DAYS`.
    /// Days at the same absolute offset share a rotation slot.
    pub fn sample_around(anchor: NaiveDate) -> Self {
        let templates = rotation_templates();
        let mut schedule = Self::new();

        for offset in -SAMPLE_HORIZON_DAYS..=SAMPLE_HORIZON_DAYS {
            let date = add_days(anchor, offset);
            let slot = offset.unsigned_abs() as usize % templates.len();
            let mut workout = templates[slot].clone();
            workout.id = format!("workout-{}", date_key(date));
            schedule.assign(date, workout);
        }

        schedule
    }
}

fn exercise(id: &str, name: &str, sets: &str) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        sets: sets.to_string(),
        target_muscle: None,
        is_completed: false,
    }
}

// The ids are left empty here; `sample_around` stamps a per-date id on each
// clone it assigns.
fn rotation_templates() -> Vec<WorkoutDay> {
    vec![
        WorkoutDay {
            id: String::new(),
            name: "Upper Body".to_string(),
            color: "#22d3ee".to_string(), // cyan
            is_rest_day: false,
            exercises: vec![
                exercise("1", "Deadlifts", "4 x 6-8"),
                exercise("2", "Pull-ups", "3 x 8-12"),
                exercise("3", "Dumbbell Press", "3 x 10-12"),
                exercise("4", "Barbell Rows", "3 x 10-12"),
                exercise("5", "Overhead Press", "3 x 8-10"),
            ],
        },
        WorkoutDay {
            id: String::new(),
            name: "Legs".to_string(),
            color: "#8b5cf6".to_string(), // purple
            is_rest_day: false,
            exercises: vec![
                exercise("6", "Squats", "4 x 8-10"),
                exercise("7", "Romanian Deadlifts", "3 x 10-12"),
                exercise("8", "Bulgarian Split Squats", "3 x 12 each"),
                exercise("9", "Hip Thrusts", "3 x 12-15"),
            ],
        },
        WorkoutDay {
            id: String::new(),
            name: "Push".to_string(),
            color: "#10b981".to_string(), // emerald
            is_rest_day: false,
            exercises: vec![
                exercise("10", "Bench Press", "4 x 6-8"),
                exercise("11", "Incline Dumbbell Press", "3 x 8-10"),
                exercise("12", "Dips", "3 x 10-12"),
                exercise("13", "Lateral Raises", "3 x 12-15"),
            ],
        },
        WorkoutDay {
            id: String::new(),
            name: "Pull".to_string(),
            color: "#f59e0b".to_string(), // amber
            is_rest_day: false,
            exercises: vec![
                exercise("14", "Pull-ups", "4 x 6-8"),
                exercise("15", "Barbell Rows", "3 x 8-10"),
                exercise("16", "Face Pulls", "3 x 12-15"),
                exercise("17", "Bicep Curls", "3 x 10-12"),
            ],
        },
        WorkoutDay {
            id: String::new(),
            name: "Shoulders".to_string(),
            color: "#ec4899".to_string(), // pink
            is_rest_day: false,
            exercises: vec![
                exercise("18", "Overhead Press", "4 x 6-8"),
                exercise("19", "Lateral Raises", "4 x 12-15"),
                exercise("20", "Rear Delt Flyes", "3 x 12-15"),
                exercise("21", "Upright Rows", "3 x 10-12"),
            ],
        },
        WorkoutDay {
            id: String::new(),
            name: "Optional Rest".to_string(),
            color: "#6b7280".to_string(), // gray
            is_rest_day: true,
            exercises: Vec::new(),
        },
    ]
}
