use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::from_row::{enum_column, FromSqliteRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetType {
    Warmup,
    #[default]
    Working,
    DropSet,
    ToFailure,
}

impl SetType {
    pub const ALL: [SetType; 4] = [
        SetType::Warmup,
        SetType::Working,
        SetType::DropSet,
        SetType::ToFailure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SetType::Warmup => "warmup",
            SetType::Working => "working",
            SetType::DropSet => "dropSet",
            SetType::ToFailure => "toFailure",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|set_type| set_type.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SetType::Warmup => "Warmup",
            SetType::Working => "Working",
            SetType::DropSet => "Drop Set",
            SetType::ToFailure => "To Failure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub id: String,
    pub workout_exercise_id: String,
    /// 1-based and dense within the owning exercise.
    pub set_number: u32,
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub rpe: Option<u8>,
    pub set_type: SetType,
    pub completed_at: Option<DateTime<Utc>>,
    /// Decided once when the set is completed, never recomputed.
    pub is_personal_record: bool,
}

impl ExerciseSet {
    pub fn new(
        workout_exercise_id: &str,
        set_number: u32,
        weight: Option<f64>,
        reps: Option<u32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            workout_exercise_id: workout_exercise_id.to_string(),
            set_number,
            weight,
            reps,
            rpe: None,
            set_type: SetType::default(),
            completed_at: None,
            is_personal_record: false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some() && self.weight.is_some() && self.reps.is_some()
    }

    pub fn volume(&self) -> f64 {
        match (self.weight, self.reps) {
            (Some(weight), Some(reps)) => weight * f64::from(reps),
            _ => 0.0,
        }
    }

    /// Label shown next to the rest timer, e.g. "Set 2 · Working".
    pub fn label(&self) -> String {
        format!("Set {} · {}", self.set_number, self.set_type.display_name())
    }
}

impl FromSqliteRow for ExerciseSet {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            workout_exercise_id: row.get("workout_exercise_id")?,
            set_number: row.get("set_number")?,
            weight: row.get("weight")?,
            reps: row.get("reps")?,
            rpe: row.get("rpe")?,
            set_type: enum_column(row, "set_type", "set type", SetType::parse)?,
            completed_at: row.get("completed_at")?,
            is_personal_record: row.get("is_personal_record")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(weight: Option<f64>, reps: Option<u32>, completed: bool) -> ExerciseSet {
        let mut set = ExerciseSet::new("we-1", 1, weight, reps);
        if completed {
            set.completed_at = Some(Utc::now());
        }
        set
    }

    #[test]
    fn test_is_completed_requires_all_three() {
        assert!(set(Some(100.0), Some(5), true).is_completed());
        assert!(!set(Some(100.0), Some(5), false).is_completed());
        assert!(!set(None, Some(5), true).is_completed());
        assert!(!set(Some(100.0), None, true).is_completed());
    }

    #[test]
    fn test_volume() {
        assert_eq!(set(Some(185.0), Some(8), false).volume(), 1480.0);
        assert_eq!(set(None, Some(8), true).volume(), 0.0);
        assert_eq!(set(Some(185.0), None, true).volume(), 0.0);
    }

    #[test]
    fn test_new_set_defaults_to_working() {
        let set = ExerciseSet::new("we-1", 3, None, None);
        assert_eq!(set.set_type, SetType::Working);
        assert!(!set.is_personal_record);
        assert_eq!(set.label(), "Set 3 · Working");
    }

    #[test]
    fn test_set_type_parse() {
        assert_eq!(SetType::parse("dropSet"), Some(SetType::DropSet));
        assert_eq!(SetType::parse("drop_set"), None);
        assert_eq!(SetType::ToFailure.display_name(), "To Failure");
    }
}
