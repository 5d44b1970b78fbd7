use rusqlite::Row;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::from_row::{enum_column, FromSqliteRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Core,
    FullBody,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 11] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Quads,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
        MuscleGroup::Calves,
        MuscleGroup::Core,
        MuscleGroup::FullBody,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Core => "core",
            MuscleGroup::FullBody => "fullBody",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Quads => "Legs (Quads)",
            MuscleGroup::Hamstrings => "Legs (Hamstrings)",
            MuscleGroup::Glutes => "Legs (Glutes)",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Cable,
    Machine,
    Bodyweight,
    Other,
}

impl Equipment {
    pub const ALL: [Equipment; 6] = [
        Equipment::Barbell,
        Equipment::Dumbbell,
        Equipment::Cable,
        Equipment::Machine,
        Equipment::Bodyweight,
        Equipment::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Barbell => "barbell",
            Equipment::Dumbbell => "dumbbell",
            Equipment::Cable => "cable",
            Equipment::Machine => "machine",
            Equipment::Bodyweight => "bodyweight",
            Equipment::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|equipment| equipment.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Cable => "Cable",
            Equipment::Machine => "Machine",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Other => "Other",
        }
    }
}

/// A catalog entry. Archived exercises stay in the table so history keeps
/// resolving, but are hidden from active listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub equipment: Equipment,
    pub is_custom: bool,
    pub is_archived: bool,
}

impl Exercise {
    pub fn new(name: &str, muscle_group: MuscleGroup, equipment: Equipment, is_custom: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            muscle_group,
            equipment,
            is_custom,
            is_archived: false,
        }
    }

    /// Read an exercise joined onto a child row, with columns aliased as
    /// `exercise_id` / `exercise_name`.
    pub(crate) fn from_joined_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("exercise_id")?,
            name: row.get("exercise_name")?,
            muscle_group: enum_column(row, "muscle_group", "muscle group", MuscleGroup::parse)?,
            equipment: enum_column(row, "equipment", "equipment", Equipment::parse)?,
            is_custom: row.get("is_custom")?,
            is_archived: row.get("is_archived")?,
        })
    }
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            muscle_group: enum_column(row, "muscle_group", "muscle group", MuscleGroup::parse)?,
            equipment: enum_column(row, "equipment", "equipment", Equipment::parse)?,
            is_custom: row.get("is_custom")?,
            is_archived: row.get("is_archived")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateExercise {
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub equipment: Equipment,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateExercise {
    pub name: Option<String>,
    pub muscle_group: Option<MuscleGroup>,
}
