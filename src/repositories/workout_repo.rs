use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, ExerciseSet, FromSqliteRow, Workout, WorkoutExercise};
use crate::personal_record::SetHistory;

const WORKOUT_EXERCISE_COLUMNS: &str =
    "we.id, we.workout_id, we.exercise_id, we.sort_order, we.notes,
     e.name AS exercise_name, e.muscle_group, e.equipment, e.is_custom, e.is_archived";

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Workouts
    pub fn create_workout(
        &self,
        start_time: DateTime<Utc>,
        name: Option<&str>,
        template_id: Option<&str>,
    ) -> Result<Workout> {
        let workout = Workout::new(start_time, name, template_id);

        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO workouts (id, name, start_time, end_time, notes, template_id)
             VALUES (?, ?, ?, NULL, NULL, ?)",
            rusqlite::params![workout.id, workout.name, workout.start_time, workout.template_id],
        )?;

        Ok(workout)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Workout>> {
        let conn = self.pool.get()?;
        let workout = conn
            .query_row("SELECT * FROM workouts WHERE id = ?", [id], Workout::from_row)
            .optional()?;
        workout.map(|w| load_tree(&conn, w)).transpose()
    }

    /// Every workout, newest first.
    pub fn find_all(&self) -> Result<Vec<Workout>> {
        self.query_workouts("SELECT * FROM workouts ORDER BY start_time DESC", [])
    }

    pub fn find_finished(&self) -> Result<Vec<Workout>> {
        self.query_workouts(
            "SELECT * FROM workouts WHERE end_time IS NOT NULL ORDER BY start_time DESC",
            [],
        )
    }

    pub fn find_in_progress(&self) -> Result<Option<Workout>> {
        let conn = self.pool.get()?;
        let workout = conn
            .query_row(
                "SELECT * FROM workouts WHERE end_time IS NULL ORDER BY start_time DESC LIMIT 1",
                [],
                Workout::from_row,
            )
            .optional()?;
        workout.map(|w| load_tree(&conn, w)).transpose()
    }

    pub fn count_in_progress(&self) -> Result<i64> {
        let conn = self.pool.get()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM workouts WHERE end_time IS NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Workouts started within `[from, to]`, newest first.
    pub fn find_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Workout>> {
        self.query_workouts(
            "SELECT * FROM workouts WHERE start_time >= ? AND start_time <= ?
             ORDER BY start_time DESC",
            rusqlite::params![from, to],
        )
    }

    /// Stamp the end time. Only an in-progress workout can be finished.
    pub fn finish(&self, id: &str, end_time: DateTime<Utc>) -> Result<bool> {
        let conn = self.pool.get()?;
        let rows = conn.execute(
            "UPDATE workouts SET end_time = ? WHERE id = ? AND end_time IS NULL",
            rusqlite::params![end_time, id],
        )?;
        Ok(rows > 0)
    }

    pub fn update_name(&self, id: &str, name: Option<&str>) -> Result<bool> {
        let conn = self.pool.get()?;
        let rows = conn.execute(
            "UPDATE workouts SET name = ? WHERE id = ?",
            rusqlite::params![name, id],
        )?;
        Ok(rows > 0)
    }

    pub fn update_notes(&self, id: &str, notes: Option<&str>) -> Result<bool> {
        let conn = self.pool.get()?;
        let rows = conn.execute(
            "UPDATE workouts SET notes = ? WHERE id = ?",
            rusqlite::params![notes, id],
        )?;
        Ok(rows > 0)
    }

    /// Delete a workout with its exercises and their sets. Catalog exercises
    /// are left alone.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute(
            "DELETE FROM exercise_sets WHERE workout_exercise_id IN
             (SELECT id FROM workout_exercises WHERE workout_id = ?)",
            [id],
        )?;
        tx.execute("DELETE FROM workout_exercises WHERE workout_id = ?", [id])?;
        let rows = tx.execute("DELETE FROM workouts WHERE id = ?", [id])?;

        tx.commit()?;
        Ok(rows > 0)
    }

    // Workout exercises
    pub fn add_exercise(
        &self,
        workout_id: &str,
        exercise: &Exercise,
        order: u32,
    ) -> Result<WorkoutExercise> {
        let workout_exercise = WorkoutExercise::new(workout_id, exercise.clone(), order);

        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO workout_exercises (id, workout_id, exercise_id, sort_order, notes)
             VALUES (?, ?, ?, ?, NULL)",
            rusqlite::params![workout_exercise.id, workout_id, exercise.id, order],
        )?;

        Ok(workout_exercise)
    }

    pub fn find_workout_exercise(&self, id: &str) -> Result<Option<WorkoutExercise>> {
        let conn = self.pool.get()?;
        let sql = format!(
            "SELECT {WORKOUT_EXERCISE_COLUMNS}
             FROM workout_exercises we JOIN exercises e ON we.exercise_id = e.id
             WHERE we.id = ?"
        );
        let workout_exercise = conn
            .query_row(&sql, [id], WorkoutExercise::from_row)
            .optional()?;
        workout_exercise
            .map(|mut we| {
                we.sets = load_sets(&conn, &we.id)?;
                Ok(we)
            })
            .transpose()
    }

    pub fn update_exercise_notes(&self, id: &str, notes: Option<&str>) -> Result<bool> {
        let conn = self.pool.get()?;
        let rows = conn.execute(
            "UPDATE workout_exercises SET notes = ? WHERE id = ?",
            rusqlite::params![notes, id],
        )?;
        Ok(rows > 0)
    }

    /// Persist a new exercise order: `ordered_ids[i]` gets order `i`.
    pub fn reorder_exercises(&self, workout_id: &str, ordered_ids: &[&str]) -> Result<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;
        for (index, id) in ordered_ids.iter().enumerate() {
            tx.execute(
                "UPDATE workout_exercises SET sort_order = ? WHERE id = ? AND workout_id = ?",
                rusqlite::params![index as u32, id, workout_id],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Delete a workout exercise and its sets, then close the gap in the
    /// remaining exercises' order.
    pub fn delete_workout_exercise(&self, id: &str) -> Result<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let workout_id: Option<String> = tx
            .query_row(
                "SELECT workout_id FROM workout_exercises WHERE id = ?",
                [id],
                |row| row.get(0),
            )
            .optional()?;
        let Some(workout_id) = workout_id else {
            return Ok(false);
        };

        tx.execute("DELETE FROM exercise_sets WHERE workout_exercise_id = ?", [id])?;
        tx.execute("DELETE FROM workout_exercises WHERE id = ?", [id])?;

        let remaining: Vec<String> = {
            let mut stmt = tx.prepare(
                "SELECT id FROM workout_exercises WHERE workout_id = ? ORDER BY sort_order",
            )?;
            let ids = stmt
                .query_map([&workout_id], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            ids
        };
        for (index, remaining_id) in remaining.iter().enumerate() {
            tx.execute(
                "UPDATE workout_exercises SET sort_order = ? WHERE id = ?",
                rusqlite::params![index as u32, remaining_id],
            )?;
        }

        tx.commit()?;
        Ok(true)
    }

    // Sets
    pub fn add_set(
        &self,
        workout_exercise_id: &str,
        set_number: u32,
        weight: Option<f64>,
        reps: Option<u32>,
    ) -> Result<ExerciseSet> {
        let set = ExerciseSet::new(workout_exercise_id, set_number, weight, reps);

        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO exercise_sets
                (id, workout_exercise_id, set_number, weight, reps, rpe, set_type, completed_at, is_personal_record)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                set.id,
                set.workout_exercise_id,
                set.set_number,
                set.weight,
                set.reps,
                set.rpe,
                set.set_type.as_str(),
                set.completed_at,
                set.is_personal_record
            ],
        )?;

        Ok(set)
    }

    /// Write back every mutable field of a set.
    pub fn update_set(&self, set: &ExerciseSet) -> Result<()> {
        let conn = self.pool.get()?;
        let rows = conn.execute(
            "UPDATE exercise_sets
             SET set_number = ?, weight = ?, reps = ?, rpe = ?, set_type = ?,
                 completed_at = ?, is_personal_record = ?
             WHERE id = ?",
            rusqlite::params![
                set.set_number,
                set.weight,
                set.reps,
                set.rpe,
                set.set_type.as_str(),
                set.completed_at,
                set.is_personal_record,
                set.id
            ],
        )?;
        if rows == 0 {
            return Err(AppError::NotFound(format!("Set {} not found", set.id)));
        }
        Ok(())
    }

    /// Delete a set and renumber its siblings densely from 1.
    pub fn delete_set(&self, id: &str) -> Result<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let parent: Option<String> = tx
            .query_row(
                "SELECT workout_exercise_id FROM exercise_sets WHERE id = ?",
                [id],
                |row| row.get(0),
            )
            .optional()?;
        let Some(parent) = parent else {
            return Ok(false);
        };

        tx.execute("DELETE FROM exercise_sets WHERE id = ?", [id])?;

        let remaining: Vec<String> = {
            let mut stmt = tx.prepare(
                "SELECT id FROM exercise_sets WHERE workout_exercise_id = ? ORDER BY set_number",
            )?;
            let ids = stmt
                .query_map([&parent], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            ids
        };
        for (index, set_id) in remaining.iter().enumerate() {
            tx.execute(
                "UPDATE exercise_sets SET set_number = ? WHERE id = ?",
                rusqlite::params![index as u32 + 1, set_id],
            )?;
        }

        tx.commit()?;
        Ok(true)
    }

    // History queries
    /// The first occurrence of `exercise_id` in the most recent finished
    /// workout that started before `before`.
    pub fn previous_workout_exercise(
        &self,
        exercise_id: &str,
        before: DateTime<Utc>,
    ) -> Result<Option<WorkoutExercise>> {
        let conn = self.pool.get()?;
        let sql = format!(
            "SELECT {WORKOUT_EXERCISE_COLUMNS}
             FROM workout_exercises we
             JOIN exercises e ON we.exercise_id = e.id
             JOIN workouts w ON we.workout_id = w.id
             WHERE we.exercise_id = ? AND w.start_time < ? AND w.end_time IS NOT NULL
             ORDER BY w.start_time DESC, we.sort_order
             LIMIT 1"
        );
        let workout_exercise = conn
            .query_row(
                &sql,
                rusqlite::params![exercise_id, before],
                WorkoutExercise::from_row,
            )
            .optional()?;
        workout_exercise
            .map(|mut we| {
                we.sets = load_sets(&conn, &we.id)?;
                Ok(we)
            })
            .transpose()
    }

    /// Distinct, non-archived exercises from finished workouts, most recent
    /// first.
    pub fn recent_exercises(&self, limit: usize) -> Result<Vec<Exercise>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT e.id AS exercise_id, e.name AS exercise_name, e.muscle_group, e.equipment,
                    e.is_custom, e.is_archived
             FROM workout_exercises we
             JOIN workouts w ON we.workout_id = w.id
             JOIN exercises e ON we.exercise_id = e.id
             WHERE w.end_time IS NOT NULL AND e.is_archived = 0
             ORDER BY w.start_time DESC, we.sort_order",
        )?;
        let rows = stmt
            .query_map([], Exercise::from_joined_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut recent: Vec<Exercise> = Vec::new();
        for exercise in rows {
            if recent.len() >= limit {
                break;
            }
            if !recent.iter().any(|e| e.id == exercise.id) {
                recent.push(exercise);
            }
        }
        Ok(recent)
    }

    fn query_workouts<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Workout>> {
        let conn = self.pool.get()?;
        let headers = {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt
                .query_map(params, Workout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        };
        headers.into_iter().map(|w| load_tree(&conn, w)).collect()
    }
}

impl SetHistory for WorkoutRepository {
    fn completed_sets_for_exercise(
        &self,
        exercise_id: &str,
        excluding_workout_id: &str,
    ) -> Result<Vec<ExerciseSet>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT s.* FROM exercise_sets s
             JOIN workout_exercises we ON s.workout_exercise_id = we.id
             JOIN workouts w ON we.workout_id = w.id
             WHERE we.exercise_id = ? AND w.id != ? AND w.end_time IS NOT NULL
               AND s.completed_at IS NOT NULL AND s.weight IS NOT NULL AND s.reps IS NOT NULL
             ORDER BY w.start_time, s.set_number",
        )?;
        let sets = stmt
            .query_map(
                rusqlite::params![exercise_id, excluding_workout_id],
                ExerciseSet::from_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(sets)
    }
}

fn load_tree(conn: &Connection, mut workout: Workout) -> Result<Workout> {
    let sql = format!(
        "SELECT {WORKOUT_EXERCISE_COLUMNS}
         FROM workout_exercises we JOIN exercises e ON we.exercise_id = e.id
         WHERE we.workout_id = ?
         ORDER BY we.sort_order"
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut exercises = stmt
        .query_map([&workout.id], WorkoutExercise::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for we in &mut exercises {
        we.sets = load_sets(conn, &we.id)?;
    }

    workout.exercises = exercises;
    Ok(workout)
}

fn load_sets(conn: &Connection, workout_exercise_id: &str) -> Result<Vec<ExerciseSet>> {
    let mut stmt = conn
        .prepare("SELECT * FROM exercise_sets WHERE workout_exercise_id = ? ORDER BY set_number")?;
    let sets = stmt
        .query_map([workout_exercise_id], ExerciseSet::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(sets)
}
