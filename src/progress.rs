//! Set-over-set progress arrows.

use serde::{Deserialize, Serialize};

use crate::models::{ExerciseSet, WorkoutExercise};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressIndicator {
    Up,
    Down,
    /// No previous set, missing data, or identical performance.
    None,
}

/// Compare weight first, then reps. Weights are compared exactly.
pub fn compare(current: &ExerciseSet, previous: Option<&ExerciseSet>) -> ProgressIndicator {
    let Some(previous) = previous else {
        return ProgressIndicator::None;
    };

    let (Some(current_weight), Some(current_reps), Some(previous_weight), Some(previous_reps)) =
        (current.weight, current.reps, previous.weight, previous.reps)
    else {
        return ProgressIndicator::None;
    };

    if current_weight > previous_weight
        || (current_weight == previous_weight && current_reps > previous_reps)
    {
        ProgressIndicator::Up
    } else if current_weight < previous_weight
        || (current_weight == previous_weight && current_reps < previous_reps)
    {
        ProgressIndicator::Down
    } else {
        ProgressIndicator::None
    }
}

/// The set in a previous occurrence of the exercise that sits at the same
/// position as `current`. Only completed sets are eligible.
pub fn previous_set_for<'a>(
    current: &ExerciseSet,
    previous_occurrence: &'a WorkoutExercise,
) -> Option<&'a ExerciseSet> {
    previous_occurrence
        .completed_sets()
        .find(|set| set.set_number == current.set_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Equipment, Exercise, MuscleGroup};
    use chrono::Utc;

    fn set(weight: Option<f64>, reps: Option<u32>) -> ExerciseSet {
        ExerciseSet::new("we", 1, weight, reps)
    }

    #[test]
    fn test_no_previous_set() {
        assert_eq!(compare(&set(Some(100.0), Some(5)), None), ProgressIndicator::None);
    }

    #[test]
    fn test_missing_operands() {
        let full = set(Some(100.0), Some(5));
        assert_eq!(compare(&set(None, Some(5)), Some(&full)), ProgressIndicator::None);
        assert_eq!(compare(&set(Some(100.0), None), Some(&full)), ProgressIndicator::None);
        assert_eq!(compare(&full, Some(&set(None, Some(5)))), ProgressIndicator::None);
        assert_eq!(compare(&full, Some(&set(Some(100.0), None))), ProgressIndicator::None);
    }

    #[test]
    fn test_weight_dominates_reps() {
        let previous = set(Some(100.0), Some(10));
        assert_eq!(compare(&set(Some(105.0), Some(1)), Some(&previous)), ProgressIndicator::Up);
        assert_eq!(compare(&set(Some(95.0), Some(20)), Some(&previous)), ProgressIndicator::Down);
    }

    #[test]
    fn test_reps_break_weight_ties() {
        let previous = set(Some(100.0), Some(8));
        assert_eq!(compare(&set(Some(100.0), Some(9)), Some(&previous)), ProgressIndicator::Up);
        assert_eq!(compare(&set(Some(100.0), Some(7)), Some(&previous)), ProgressIndicator::Down);
        assert_eq!(compare(&set(Some(100.0), Some(8)), Some(&previous)), ProgressIndicator::None);
    }

    #[test]
    fn test_total_ordering_over_grid() {
        let values = [(95.0, 5), (100.0, 4), (100.0, 5), (100.0, 6), (105.0, 5)];
        for &(cw, cr) in &values {
            for &(pw, pr) in &values {
                let result = compare(&set(Some(cw), Some(cr)), Some(&set(Some(pw), Some(pr))));
                let expected = if cw > pw || (cw == pw && cr > pr) {
                    ProgressIndicator::Up
                } else if cw < pw || (cw == pw && cr < pr) {
                    ProgressIndicator::Down
                } else {
                    ProgressIndicator::None
                };
                assert_eq!(result, expected, "current ({cw}, {cr}) vs previous ({pw}, {pr})");
            }
        }
    }

    #[test]
    fn test_previous_set_pairs_by_set_number() {
        let exercise = Exercise::new("Squat", MuscleGroup::Quads, Equipment::Barbell, false);
        let mut past = WorkoutExercise::new("w-old", exercise, 0);
        for (number, weight) in [(1, 135.0), (2, 185.0)] {
            let mut done = ExerciseSet::new(&past.id, number, Some(weight), Some(5));
            done.completed_at = Some(Utc::now());
            past.sets.push(done);
        }
        // Logged but never completed.
        past.sets.push(ExerciseSet::new(&past.id, 3, Some(205.0), Some(5)));

        let current = ExerciseSet::new("we-new", 2, Some(190.0), Some(5));
        let paired = previous_set_for(&current, &past).unwrap();
        assert_eq!(paired.weight, Some(185.0));

        let third = ExerciseSet::new("we-new", 3, Some(205.0), Some(5));
        assert!(previous_set_for(&third, &past).is_none());
    }
}
