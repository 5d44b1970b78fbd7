//! Domain core for a strength-training log: plate math, estimated one-rep
//! maxes, personal records, progress arrows, rest timing and the live
//! workout session, backed by SQLite.

pub mod config;
pub mod db;
pub mod error;
pub mod history;
pub mod migrations;
pub mod models;
pub mod notifier;
pub mod one_rep_max;
pub mod personal_record;
pub mod plates;
pub mod progress;
pub mod repositories;
pub mod rest_timer;
pub mod session;
pub mod telemetry;
pub mod timer;

pub use config::Config;
pub use error::{AppError, Result};
pub use session::WorkoutSession;
