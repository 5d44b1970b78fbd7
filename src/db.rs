use std::path::Path;
use std::time::Duration;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::Config;
use crate::migrations::run_migrations;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Pool for a `sqlite:` URL such as `sqlite:ironlog.db?mode=rwc`. Query
/// parameters are ignored; `sqlite::memory:` gets a single-connection pool.
pub fn create_pool(database_url: &str) -> Result<DbPool, r2d2::Error> {
    let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or(path);

    if path == ":memory:" {
        return create_memory_pool();
    }

    let manager = SqliteConnectionManager::file(Path::new(path))
        .with_init(|conn| conn.busy_timeout(Duration::from_secs(5)));
    Pool::builder().max_size(5).build(manager)
}

/// Every pooled connection to `:memory:` is its own database, so the pool is
/// capped at one connection.
pub fn create_memory_pool() -> Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::memory();
    Pool::builder().max_size(1).build(manager)
}

/// Open the configured database and bring its schema up to date.
pub fn open(config: &Config) -> anyhow::Result<DbPool> {
    tracing::info!("Opening database: {}", config.database_url);
    let pool = create_pool(&config.database_url)?;
    run_migrations(&pool)?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::ExerciseRepository;

    #[test]
    fn test_open_memory_database_is_migrated() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            ..Config::default()
        };

        let pool = open(&config).unwrap();
        let exercises = ExerciseRepository::new(pool);
        assert!(exercises.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_open_file_database() {
        let path = std::env::temp_dir().join(format!("ironlog-{}.db", uuid::Uuid::new_v4()));
        let config = Config {
            database_url: format!("sqlite:{}?mode=rwc", path.display()),
            ..Config::default()
        };

        let pool = open(&config).unwrap();
        assert!(ExerciseRepository::new(pool.clone()).seed_defaults().unwrap() > 0);
        drop(pool);

        // Reopening keeps data and skips applied migrations.
        let pool = open(&config).unwrap();
        assert_eq!(ExerciseRepository::new(pool).seed_defaults().unwrap(), 0);
        let _ = std::fs::remove_file(path);
    }
}
