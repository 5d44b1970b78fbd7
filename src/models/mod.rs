pub mod catalog;
pub mod exercise;
pub mod exercise_set;
pub mod from_row;
pub mod template;
pub mod workout;

pub use exercise::{CreateExercise, Equipment, Exercise, MuscleGroup, UpdateExercise};
pub use exercise_set::{ExerciseSet, SetType};
pub use from_row::FromSqliteRow;
pub use template::{Template, TemplateExercise, DEFAULT_TEMPLATE_SETS};
pub use workout::{Workout, WorkoutExercise};
