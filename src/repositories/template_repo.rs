use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, Template, TemplateExercise, Workout, DEFAULT_TEMPLATE_SETS};

#[derive(Clone)]
pub struct TemplateRepository {
    pool: DbPool,
}

impl TemplateRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a template from catalog exercise ids, in the given order, each
    /// with the default set count.
    pub fn create(
        &self,
        name: &str,
        exercise_ids: &[&str],
        created_at: DateTime<Utc>,
    ) -> Result<Template> {
        let entries: Vec<(&str, u32)> = exercise_ids
            .iter()
            .map(|id| (*id, DEFAULT_TEMPLATE_SETS))
            .collect();
        self.insert(name, &entries, created_at)
    }

    /// Snapshot a workout's exercise list. Each entry keeps as many default
    /// sets as the workout had for it.
    pub fn create_from_workout(
        &self,
        workout: &Workout,
        name: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Template> {
        let entries: Vec<(&str, u32)> = workout
            .exercises
            .iter()
            .map(|we| (we.exercise.id.as_str(), we.sets.len().max(1) as u32))
            .collect();
        self.insert(name, &entries, created_at)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Template>> {
        let conn = self.pool.get()?;
        let template = conn
            .query_row("SELECT * FROM templates WHERE id = ?", [id], Template::from_row)
            .optional()?;
        template.map(|t| load_exercises(&conn, t)).transpose()
    }

    /// Most recently used first; never-used templates last, newest first.
    pub fn find_all(&self) -> Result<Vec<Template>> {
        let conn = self.pool.get()?;
        let templates = {
            let mut stmt = conn.prepare(
                "SELECT * FROM templates
                 ORDER BY last_used_at IS NULL, last_used_at DESC, created_at DESC",
            )?;
            let rows = stmt
                .query_map([], Template::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        };
        templates
            .into_iter()
            .map(|t| load_exercises(&conn, t))
            .collect()
    }

    pub fn touch_last_used(&self, id: &str, at: DateTime<Utc>) -> Result<bool> {
        let conn = self.pool.get()?;
        let rows = conn.execute(
            "UPDATE templates SET last_used_at = ? WHERE id = ?",
            rusqlite::params![at, id],
        )?;
        Ok(rows > 0)
    }

    pub fn rename(&self, id: &str, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Template name is required".to_string()));
        }

        let conn = self.pool.get()?;
        let rows = conn.execute(
            "UPDATE templates SET name = ? WHERE id = ?",
            rusqlite::params![name, id],
        )?;
        Ok(rows > 0)
    }

    /// Delete a template and its entries. Workouts started from it keep
    /// their template id.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM template_exercises WHERE template_id = ?", [id])?;
        let rows = tx.execute("DELETE FROM templates WHERE id = ?", [id])?;
        tx.commit()?;
        Ok(rows > 0)
    }

    fn insert(
        &self,
        name: &str,
        entries: &[(&str, u32)],
        created_at: DateTime<Utc>,
    ) -> Result<Template> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Template name is required".to_string()));
        }

        let id = Uuid::new_v4().to_string();
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO templates (id, name, created_at, last_used_at) VALUES (?, ?, ?, NULL)",
            rusqlite::params![id, name, created_at],
        )?;
        for (order, (exercise_id, default_sets)) in entries.iter().enumerate() {
            tx.execute(
                "INSERT INTO template_exercises (id, template_id, exercise_id, sort_order, default_sets)
                 VALUES (?, ?, ?, ?, ?)",
                rusqlite::params![
                    Uuid::new_v4().to_string(),
                    id,
                    exercise_id,
                    order as u32,
                    default_sets
                ],
            )?;
        }
        tx.commit()?;

        let template = conn
            .query_row("SELECT * FROM templates WHERE id = ?", [&id], Template::from_row)?;
        load_exercises(&conn, template)
    }
}

fn load_exercises(conn: &Connection, mut template: Template) -> Result<Template> {
    let mut stmt = conn.prepare(
        "SELECT te.id, te.template_id, te.exercise_id, te.sort_order, te.default_sets,
                e.name AS exercise_name, e.muscle_group, e.equipment, e.is_custom, e.is_archived
         FROM template_exercises te JOIN exercises e ON te.exercise_id = e.id
         WHERE te.template_id = ?
         ORDER BY te.sort_order",
    )?;
    template.exercises = stmt
        .query_map([&template.id], TemplateExercise::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations_for_tests;
    use crate::models::{CreateExercise, Equipment, Exercise, MuscleGroup};
    use crate::repositories::{ExerciseRepository, WorkoutRepository};
    use chrono::Duration;

    fn setup_test_db() -> DbPool {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        pool
    }

    fn create_exercise(pool: &DbPool, name: &str, group: MuscleGroup) -> Exercise {
        ExerciseRepository::new(pool.clone())
            .create(
                &CreateExercise {
                    name: name.to_string(),
                    muscle_group: group,
                    equipment: Equipment::Barbell,
                },
                false,
            )
            .unwrap()
    }

    #[test]
    fn test_create_template_keeps_order() {
        let pool = setup_test_db();
        let squat = create_exercise(&pool, "Squat", MuscleGroup::Quads);
        let bench = create_exercise(&pool, "Bench Press", MuscleGroup::Chest);
        let repo = TemplateRepository::new(pool);

        let template = repo
            .create("Full Body", &[&squat.id, &bench.id], Utc::now())
            .unwrap();

        assert_eq!(template.name, "Full Body");
        assert_eq!(template.exercise_count(), 2);
        assert_eq!(template.exercises[0].exercise.name, "Squat");
        assert_eq!(template.exercises[1].order, 1);
        assert!(template
            .exercises
            .iter()
            .all(|te| te.default_sets == DEFAULT_TEMPLATE_SETS));
        assert!(template.last_used_at.is_none());
    }

    #[test]
    fn test_create_requires_name() {
        let repo = TemplateRepository::new(setup_test_db());
        let result = repo.create("  ", &[], Utc::now());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_create_from_workout_uses_set_counts() {
        let pool = setup_test_db();
        let squat = create_exercise(&pool, "Squat", MuscleGroup::Quads);
        let workouts = WorkoutRepository::new(pool.clone());
        let workout = workouts.create_workout(Utc::now(), None, None).unwrap();
        let we = workouts.add_exercise(&workout.id, &squat, 0).unwrap();
        for n in 1..=5 {
            workouts.add_set(&we.id, n, Some(225.0), Some(5)).unwrap();
        }
        let workout = workouts.find_by_id(&workout.id).unwrap().unwrap();

        let template = TemplateRepository::new(pool)
            .create_from_workout(&workout, "Squat Day", Utc::now())
            .unwrap();

        assert_eq!(template.exercises.len(), 1);
        assert_eq!(template.exercises[0].default_sets, 5);
    }

    #[test]
    fn test_find_all_orders_by_last_used() {
        let pool = setup_test_db();
        let repo = TemplateRepository::new(pool);
        let now = Utc::now();

        let never = repo.create("Never", &[], now).unwrap();
        let old = repo.create("Old", &[], now).unwrap();
        let recent = repo.create("Recent", &[], now).unwrap();
        repo.touch_last_used(&old.id, now - Duration::days(7)).unwrap();
        repo.touch_last_used(&recent.id, now).unwrap();

        let names: Vec<String> = repo.find_all().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Recent", "Old", "Never"]);
        assert!(repo.find_by_id(&never.id).unwrap().unwrap().last_used_at.is_none());
    }

    #[test]
    fn test_rename_and_delete() {
        let pool = setup_test_db();
        let squat = create_exercise(&pool, "Squat", MuscleGroup::Quads);
        let repo = TemplateRepository::new(pool.clone());
        let template = repo.create("Legs", &[&squat.id], Utc::now()).unwrap();

        assert!(repo.rename(&template.id, "Leg Day").unwrap());
        assert_eq!(repo.find_by_id(&template.id).unwrap().unwrap().name, "Leg Day");

        assert!(repo.delete(&template.id).unwrap());
        assert!(repo.find_by_id(&template.id).unwrap().is_none());

        let conn = pool.get().unwrap();
        let leftovers: i64 = conn
            .query_row("SELECT COUNT(*) FROM template_exercises", [], |row| row.get(0))
            .unwrap();
        drop(conn);
        assert_eq!(leftovers, 0);

        // Catalog untouched, and deletable again now that nothing refers to it.
        assert!(ExerciseRepository::new(pool).delete(&squat.id).unwrap());
    }
}
