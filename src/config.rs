use std::env;

use crate::rest_timer::{RestPolicy, DEFAULT_REST_SECONDS};

pub const DEFAULT_MAX_SETS_PER_EXERCISE: u32 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub default_rest_seconds: u32,
    pub max_sets_per_exercise: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:ironlog.db?mode=rwc".to_string(),
            default_rest_seconds: DEFAULT_REST_SECONDS,
            max_sets_per_exercise: DEFAULT_MAX_SETS_PER_EXERCISE,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and then read the environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            default_rest_seconds: env::var("DEFAULT_REST_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.default_rest_seconds),
            max_sets_per_exercise: env::var("MAX_SETS_PER_EXERCISE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|max| *max > 0)
                .unwrap_or(defaults.max_sets_per_exercise),
        }
    }

    pub fn rest_policy(&self) -> RestPolicy {
        RestPolicy::new(self.default_rest_seconds)
    }
}
