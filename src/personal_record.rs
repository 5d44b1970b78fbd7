//! Personal record detection.
//!
//! A completed set is a PR when its estimated 1RM strictly beats every
//! estimated 1RM the lifter has ever recorded for that exercise in *other*
//! workouts. Sets from the workout in progress never count as history, so a
//! warm-up ladder inside one session cannot inflate the PR count.

use crate::error::Result;
use crate::models::ExerciseSet;
use crate::one_rep_max;

/// Read-only access to completed sets from finished workouts.
pub trait SetHistory {
    /// Every completed set for `exercise_id` in finished workouts, except the
    /// workout identified by `excluding_workout_id`.
    fn completed_sets_for_exercise(
        &self,
        exercise_id: &str,
        excluding_workout_id: &str,
    ) -> Result<Vec<ExerciseSet>>;
}

/// Decide whether `candidate` is a PR against already-fetched history.
pub fn is_personal_record(candidate: &ExerciseSet, history: &[ExerciseSet]) -> bool {
    let Some(candidate_e1rm) = one_rep_max::estimate_checked(candidate.weight, candidate.reps)
    else {
        return false;
    };

    if history.is_empty() {
        return true;
    }

    // Out-of-domain history (no reps, 37+ reps) cannot be compared and is skipped.
    history
        .iter()
        .filter_map(|set| one_rep_max::estimate_checked(set.weight, set.reps))
        .all(|previous_e1rm| previous_e1rm < candidate_e1rm)
}

/// Fetch history for the exercise and evaluate `candidate` against it.
///
/// O(n) in the exercise's historical set count; nothing is cached.
pub fn evaluate<H: SetHistory + ?Sized>(
    candidate: &ExerciseSet,
    exercise_id: &str,
    current_workout_id: &str,
    history: &H,
) -> Result<bool> {
    if one_rep_max::estimate_checked(candidate.weight, candidate.reps).is_none() {
        return Ok(false);
    }

    let previous = history.completed_sets_for_exercise(exercise_id, current_workout_id)?;
    let is_pr = is_personal_record(candidate, &previous);

    tracing::debug!(
        exercise_id,
        history_sets = previous.len(),
        is_pr,
        "Evaluated personal record"
    );

    Ok(is_pr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    /// Sets already narrowed to one exercise outside the current workout.
    impl SetHistory for Vec<ExerciseSet> {
        fn completed_sets_for_exercise(&self, _: &str, _: &str) -> Result<Vec<ExerciseSet>> {
            Ok(self.iter().filter(|set| set.is_completed()).cloned().collect())
        }
    }

    fn completed(weight: f64, reps: u32) -> ExerciseSet {
        let mut set = ExerciseSet::new("we", 1, Some(weight), Some(reps));
        set.completed_at = Some(Utc::now());
        set
    }

    #[test]
    fn test_first_set_is_pr() {
        assert!(is_personal_record(&completed(135.0, 5), &[]));
    }

    #[test]
    fn test_missing_weight_or_reps_is_never_pr() {
        let no_weight = ExerciseSet::new("we", 1, None, Some(5));
        let no_reps = ExerciseSet::new("we", 1, Some(100.0), None);
        let zero_reps = ExerciseSet::new("we", 1, Some(100.0), Some(0));
        assert!(!is_personal_record(&no_weight, &[]));
        assert!(!is_personal_record(&no_reps, &[]));
        assert!(!is_personal_record(&zero_reps, &[]));
    }

    #[test]
    fn test_candidate_outside_formula_domain_is_never_pr() {
        assert!(!is_personal_record(&completed(100.0, 37), &[]));
        assert!(!is_personal_record(&completed(100.0, 40), &[completed(45.0, 1)]));
    }

    #[test]
    fn test_strict_improvement_required() {
        let history = vec![completed(185.0, 8)];
        // Same e1RM is a tie, not a PR.
        assert!(!is_personal_record(&completed(185.0, 8), &history));
        assert!(!is_personal_record(&completed(180.0, 8), &history));
        assert!(is_personal_record(&completed(185.0, 10), &history));
    }

    #[test]
    fn test_scans_full_history_not_just_latest() {
        // Old peak 225×5, recent regression 185×5.
        let history = vec![completed(225.0, 5), completed(185.0, 5)];
        assert!(!is_personal_record(&completed(200.0, 5), &history));
        assert!(is_personal_record(&completed(230.0, 5), &history));
    }

    #[test]
    fn test_out_of_domain_history_is_skipped() {
        // 40 reps would give a negative e1RM; it must neither block nor count.
        let history = vec![completed(50.0, 40), completed(100.0, 5)];
        assert!(is_personal_record(&completed(110.0, 5), &history));
        assert!(!is_personal_record(&completed(90.0, 5), &history));
    }

    #[test]
    fn test_evaluate_uses_history_source() {
        let history: Vec<ExerciseSet> = vec![completed(200.0, 5)];
        assert!(!evaluate(&completed(190.0, 5), "ex", "w", &history).unwrap());
        assert!(evaluate(&completed(210.0, 5), "ex", "w", &history).unwrap());
    }

    #[test]
    fn test_evaluate_ignores_uncompleted_history() {
        let history: Vec<ExerciseSet> = vec![ExerciseSet::new("we", 1, Some(500.0), Some(5))];
        assert!(evaluate(&completed(100.0, 5), "ex", "w", &history).unwrap());
    }
}
