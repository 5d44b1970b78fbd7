use std::collections::HashSet;

use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::catalog::DEFAULT_EXERCISES;
use crate::models::{CreateExercise, Exercise, FromSqliteRow, MuscleGroup, UpdateExercise};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, input: &CreateExercise, is_custom: bool) -> Result<Exercise> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Exercise name is required".to_string()));
        }

        let exercise = Exercise::new(name, input.muscle_group, input.equipment, is_custom);
        let conn = self.pool.get()?;
        insert(&conn, &exercise)?;
        Ok(exercise)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Exercise>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT * FROM exercises WHERE id = ?")?;
        let result = stmt.query_row([id], Exercise::from_row).optional()?;
        Ok(result)
    }

    /// Active (non-archived) exercises by name.
    pub fn find_all(&self) -> Result<Vec<Exercise>> {
        let conn = self.pool.get()?;
        let mut stmt =
            conn.prepare("SELECT * FROM exercises WHERE is_archived = 0 ORDER BY name")?;
        let exercises = stmt
            .query_map([], Exercise::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(exercises)
    }

    pub fn find_by_muscle_group(&self, muscle_group: MuscleGroup) -> Result<Vec<Exercise>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM exercises WHERE muscle_group = ? AND is_archived = 0 ORDER BY name",
        )?;
        let exercises = stmt
            .query_map([muscle_group.as_str()], Exercise::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(exercises)
    }

    /// Case-insensitive substring match over active exercise names.
    pub fn search(&self, query: &str) -> Result<Vec<Exercise>> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|exercise| exercise.name.to_lowercase().contains(&needle))
            .collect())
    }

    pub fn update(&self, id: &str, changes: &UpdateExercise) -> Result<bool> {
        let conn = self.pool.get()?;
        let mut rows = 0;
        if let Some(name) = changes.name.as_deref() {
            rows += conn.execute(
                "UPDATE exercises SET name = ? WHERE id = ?",
                rusqlite::params![name, id],
            )?;
        }
        if let Some(group) = changes.muscle_group {
            rows += conn.execute(
                "UPDATE exercises SET muscle_group = ? WHERE id = ?",
                rusqlite::params![group.as_str(), id],
            )?;
        }
        Ok(rows > 0)
    }

    pub fn archive(&self, id: &str) -> Result<bool> {
        let conn = self.pool.get()?;
        let rows = conn.execute("UPDATE exercises SET is_archived = 1 WHERE id = ?", [id])?;
        Ok(rows > 0)
    }

    /// Hard delete. Refused while any workout or template still points at the
    /// exercise; archive those instead.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let conn = self.pool.get()?;
        let references: i64 = conn.query_row(
            "SELECT (SELECT COUNT(*) FROM workout_exercises WHERE exercise_id = ?1)
                  + (SELECT COUNT(*) FROM template_exercises WHERE exercise_id = ?1)",
            [id],
            |row| row.get(0),
        )?;
        if references > 0 {
            return Err(AppError::Validation(
                "Exercise is used by workout history; archive it instead".to_string(),
            ));
        }

        let rows = conn.execute("DELETE FROM exercises WHERE id = ?", [id])?;
        Ok(rows > 0)
    }

    /// Insert the built-in catalog, skipping names that already exist
    /// (archived ones included). Returns how many were added.
    pub fn seed_defaults(&self) -> Result<usize> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let existing: HashSet<String> = {
            let mut stmt = tx.prepare("SELECT name FROM exercises")?;
            let names = stmt
                .query_map([], |row| row.get(0))?
                .collect::<rusqlite::Result<HashSet<String>>>()?;
            names
        };

        let mut added = 0;
        for (name, muscle_group, equipment) in DEFAULT_EXERCISES {
            if existing.contains(*name) {
                continue;
            }
            insert(&tx, &Exercise::new(name, *muscle_group, *equipment, false))?;
            added += 1;
        }

        tx.commit()?;
        tracing::info!("Seeded {} default exercises", added);
        Ok(added)
    }
}

fn insert(conn: &rusqlite::Connection, exercise: &Exercise) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO exercises (id, name, muscle_group, equipment, is_custom, is_archived)
         VALUES (?, ?, ?, ?, ?, ?)",
        rusqlite::params![
            exercise.id,
            exercise.name,
            exercise.muscle_group.as_str(),
            exercise.equipment.as_str(),
            exercise.is_custom,
            exercise.is_archived
        ],
    )?;
    Ok(())
}
