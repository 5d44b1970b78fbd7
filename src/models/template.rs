use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{Exercise, FromSqliteRow};

pub const DEFAULT_TEMPLATE_SETS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub exercises: Vec<TemplateExercise>,
}

impl Template {
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }
}

impl FromSqliteRow for Template {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            created_at: row.get("created_at")?,
            last_used_at: row.get("last_used_at")?,
            exercises: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExercise {
    pub id: String,
    pub template_id: String,
    pub exercise: Exercise,
    pub order: u32,
    pub default_sets: u32,
}

impl FromSqliteRow for TemplateExercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            template_id: row.get("template_id")?,
            exercise: Exercise::from_joined_row(row)?,
            order: row.get("sort_order")?,
            default_sets: row.get("default_sets")?,
        })
    }
}
