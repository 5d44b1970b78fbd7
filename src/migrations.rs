//! Embedded database migrations
//!
//! The schema ships inside the library, so hosts never need migration files
//! next to the database at runtime.

use std::collections::HashSet;

use anyhow::Context;

use crate::db::DbPool;

/// All migrations in order, each as (filename, sql_content)
pub const MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_create_exercises.sql",
        include_str!("../migrations/001_create_exercises.sql"),
    ),
    (
        "002_create_workouts.sql",
        include_str!("../migrations/002_create_workouts.sql"),
    ),
    (
        "003_create_workout_exercises.sql",
        include_str!("../migrations/003_create_workout_exercises.sql"),
    ),
    (
        "004_create_exercise_sets.sql",
        include_str!("../migrations/004_create_exercise_sets.sql"),
    ),
    (
        "005_create_templates.sql",
        include_str!("../migrations/005_create_templates.sql"),
    ),
];

/// Apply pending migrations, each in its own transaction together with its
/// `_migrations` record. Returns how many were applied.
pub fn run_migrations(pool: &DbPool) -> anyhow::Result<usize> {
    let mut conn = pool.get()?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )?;

    let applied: HashSet<String> = {
        let mut stmt = conn.prepare("SELECT name FROM _migrations")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<HashSet<String>>>()?;
        names
    };

    let mut count = 0;
    for (name, sql) in MIGRATIONS {
        if applied.contains(*name) {
            tracing::debug!(migration = name, "Skipping applied migration");
            continue;
        }

        let tx = conn.transaction()?;
        tx.execute_batch(sql)
            .with_context(|| format!("Migration {name} failed"))?;
        tx.execute("INSERT INTO _migrations (name) VALUES (?)", [name])?;
        tx.commit()?;

        tracing::info!(migration = name, "Applied migration");
        count += 1;
    }

    Ok(count)
}

/// Run every migration without tracking, for fresh in-memory databases.
pub fn run_migrations_for_tests(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;
    for (_name, sql) in MIGRATIONS {
        conn.execute_batch(sql)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[test]
    fn test_run_migrations_is_idempotent() {
        let pool = create_memory_pool().unwrap();

        assert_eq!(run_migrations(&pool).unwrap(), MIGRATIONS.len());
        assert_eq!(run_migrations(&pool).unwrap(), 0);

        let conn = pool.get().unwrap();
        let applied: i64 = conn
            .query_row("SELECT COUNT(*) FROM _migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, MIGRATIONS.len() as i64);
    }
}
