use chrono::{DateTime, Duration, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Exercise, ExerciseSet, FromSqliteRow};

/// A workout session. Owns its exercises, which own their sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: Option<String>,
    pub start_time: DateTime<Utc>,
    /// `None` while the workout is in progress.
    pub end_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub template_id: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    pub fn new(start_time: DateTime<Utc>, name: Option<&str>, template_id: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.map(|s| s.to_string()),
            start_time,
            end_time: None,
            notes: None,
            template_id: template_id.map(|s| s.to_string()),
            exercises: Vec::new(),
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().map(|we| we.total_volume()).sum()
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|we| we.completed_sets().count()).sum()
    }

    pub fn personal_records_count(&self) -> usize {
        self.exercises
            .iter()
            .flat_map(|we| we.sets.iter())
            .filter(|set| set.is_personal_record)
            .count()
    }

    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }

        let names: Vec<&str> = self
            .exercises
            .iter()
            .map(|we| we.exercise.name.as_str())
            .collect();
        match names.len() {
            0 => "Workout".to_string(),
            1 | 2 => names.join(" & "),
            _ => format!("{}...", names[..2].join(", ")),
        }
    }
}

/// Row-only read: children are attached by the repository.
impl FromSqliteRow for Workout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            start_time: row.get("start_time")?,
            end_time: row.get("end_time")?,
            notes: row.get("notes")?,
            template_id: row.get("template_id")?,
            exercises: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: String,
    pub workout_id: String,
    pub exercise: Exercise,
    /// 0-based and dense within the workout.
    pub order: u32,
    pub notes: Option<String>,
    pub sets: Vec<ExerciseSet>,
}

impl WorkoutExercise {
    pub fn new(workout_id: &str, exercise: Exercise, order: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            workout_id: workout_id.to_string(),
            exercise,
            order,
            notes: None,
            sets: Vec::new(),
        }
    }

    pub fn completed_sets(&self) -> impl Iterator<Item = &ExerciseSet> {
        self.sets.iter().filter(|set| set.is_completed())
    }

    pub fn total_volume(&self) -> f64 {
        self.completed_sets().map(ExerciseSet::volume).sum()
    }

    pub fn next_set_number(&self) -> u32 {
        self.sets.len() as u32 + 1
    }
}

impl FromSqliteRow for WorkoutExercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            workout_id: row.get("workout_id")?,
            exercise: Exercise::from_joined_row(row)?,
            order: row.get("sort_order")?,
            notes: row.get("notes")?,
            sets: Vec::new(),
        })
    }
}
