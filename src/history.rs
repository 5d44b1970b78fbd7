//! Summary numbers for the history and trends screens.
//!
//! Everything here works on workouts already loaded by
//! [`WorkoutRepository`](crate::repositories::WorkoutRepository); days are UTC
//! calendar days of the workout's start time.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{Exercise, ExerciseSet, Workout, WorkoutExercise};
use crate::one_rep_max;

/// Weeks shown by the weekly volume chart.
pub const VOLUME_WEEKS: usize = 12;

/// Share of the heaviest weight a set needs to compete for most reps.
const MOST_REPS_MIN_SHARE: f64 = 0.5;

pub fn total_workouts(workouts: &[Workout]) -> usize {
    workouts.len()
}

pub fn total_volume(workouts: &[Workout]) -> f64 {
    workouts.iter().map(Workout::total_volume).sum()
}

pub fn total_personal_records(workouts: &[Workout]) -> usize {
    workouts.iter().map(Workout::personal_records_count).sum()
}

/// Consecutive training days ending today, or ending yesterday when nothing
/// has been logged yet today.
pub fn current_streak(workouts: &[Workout], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = workouts.iter().map(training_day).collect();

    let mut day = if days.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        match day.checked_sub_days(Days::new(1)) {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

pub fn group_by_day(workouts: &[Workout]) -> BTreeMap<NaiveDate, Vec<&Workout>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Workout>> = BTreeMap::new();
    for workout in workouts {
        grouped.entry(training_day(workout)).or_default().push(workout);
    }
    grouped
}

pub fn workouts_on(workouts: &[Workout], day: NaiveDate) -> Vec<&Workout> {
    workouts.iter().filter(|w| training_day(w) == day).collect()
}

pub fn has_workout_on(workouts: &[Workout], day: NaiveDate) -> bool {
    workouts.iter().any(|w| training_day(w) == day)
}

fn training_day(workout: &Workout) -> NaiveDate {
    workout.start_time.date_naive()
}

/// Monday of the ISO week containing `day`.
fn week_start(day: NaiveDate) -> NaiveDate {
    let offset = u64::from(day.weekday().num_days_from_monday());
    day.checked_sub_days(Days::new(offset)).unwrap_or(day)
}

pub fn workouts_since(workouts: &[Workout], since: DateTime<Utc>) -> Vec<&Workout> {
    workouts.iter().filter(|w| w.start_time >= since).collect()
}

pub fn workouts_this_week(workouts: &[Workout], today: NaiveDate) -> usize {
    let monday = week_start(today);
    workouts
        .iter()
        .filter(|w| (monday..=today).contains(&training_day(w)))
        .count()
}

/// Workouts divided by whole weeks since the first one, at least one week.
pub fn workouts_per_week(workouts: &[Workout], today: NaiveDate) -> usize {
    let Some(first) = workouts.iter().map(training_day).min() else {
        return 0;
    };
    let weeks = (today - first).num_weeks().max(1) as usize;
    workouts.len() / weeks
}

/// Mean length of finished workouts.
pub fn average_duration(workouts: &[Workout]) -> Option<Duration> {
    let seconds: Vec<i64> = workouts
        .iter()
        .filter_map(Workout::duration)
        .map(|d| d.num_seconds())
        .collect();
    if seconds.is_empty() {
        return None;
    }
    Some(Duration::seconds(seconds.iter().sum::<i64>() / seconds.len() as i64))
}

/// Mean number of full days off between consecutive workouts.
pub fn average_rest_days(workouts: &[Workout]) -> u32 {
    let mut starts: Vec<DateTime<Utc>> = workouts.iter().map(|w| w.start_time).collect();
    if starts.len() < 2 {
        return 0;
    }
    starts.sort();

    let rest_days: i64 = starts
        .windows(2)
        .map(|pair| ((pair[1] - pair[0]).num_days() - 1).max(0))
        .sum();
    (rest_days / (starts.len() as i64 - 1)) as u32
}

/// Total volume per ISO week, oldest first, limited to the latest
/// [`VOLUME_WEEKS`] weeks that have workouts.
pub fn volume_by_week(workouts: &[Workout]) -> Vec<(NaiveDate, f64)> {
    let mut weeks: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for workout in workouts {
        *weeks.entry(week_start(training_day(workout))).or_default() += workout.total_volume();
    }

    let skip = weeks.len().saturating_sub(VOLUME_WEEKS);
    weeks.into_iter().skip(skip).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntry {
    pub set_id: String,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: u32,
    pub date: DateTime<Utc>,
}

/// Every PR set, newest workout first.
pub fn recent_personal_records(workouts: &[Workout]) -> Vec<RecordEntry> {
    let mut ordered: Vec<&Workout> = workouts.iter().collect();
    ordered.sort_by(|a, b| b.start_time.cmp(&a.start_time));

    let mut records = Vec::new();
    for workout in ordered {
        for we in &workout.exercises {
            for set in we.sets.iter().filter(|s| s.is_personal_record) {
                if let (Some(weight), Some(reps)) = (set.weight, set.reps) {
                    records.push(RecordEntry {
                        set_id: set.id.clone(),
                        exercise_name: we.exercise.name.clone(),
                        weight,
                        reps,
                        date: workout.start_time,
                    });
                }
            }
        }
    }
    records
}

/// Distinct exercises that appear in `workouts`, sorted by name.
pub fn logged_exercises(workouts: &[Workout]) -> Vec<&Exercise> {
    let mut seen = HashSet::new();
    let mut exercises: Vec<&Exercise> = workouts
        .iter()
        .flat_map(|w| &w.exercises)
        .map(|we| &we.exercise)
        .filter(|exercise| seen.insert(exercise.id.as_str()))
        .collect();
    exercises.sort_by(|a, b| a.name.cmp(&b.name));
    exercises
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStats {
    pub total_volume: f64,
    pub total_sets: usize,
    pub workout_count: usize,
    /// e1RM of the heaviest completed set; `None` when that set's reps are
    /// outside the formula's domain.
    pub estimated_one_rep_max: Option<f64>,
}

pub fn exercise_stats(workouts: &[Workout], exercise_id: &str) -> ExerciseStats {
    let mut stats = ExerciseStats {
        total_volume: 0.0,
        total_sets: 0,
        workout_count: 0,
        estimated_one_rep_max: None,
    };
    let mut heaviest: Option<&ExerciseSet> = None;

    for workout in chronological(workouts) {
        let mut found = false;
        for we in occurrences(workout, exercise_id) {
            found = true;
            stats.total_volume += we.total_volume();
            for set in we.completed_sets() {
                stats.total_sets += 1;
                if heaviest.map_or(true, |best| set.weight > best.weight) {
                    heaviest = Some(set);
                }
            }
        }
        if found {
            stats.workout_count += 1;
        }
    }

    stats.estimated_one_rep_max =
        heaviest.and_then(|set| one_rep_max::estimate_checked(set.weight, set.reps));
    stats
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BestSetKind {
    HeaviestWeight,
    MostReps,
    HighestVolume,
}

impl BestSetKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            BestSetKind::HeaviestWeight => "Heaviest Weight",
            BestSetKind::MostReps => "Most Reps",
            BestSetKind::HighestVolume => "Highest Volume",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSet {
    pub kind: BestSetKind,
    pub weight: f64,
    pub reps: u32,
    pub date: DateTime<Utc>,
}

/// Heaviest set, most reps at no less than half the heaviest weight, and
/// highest single-set volume, in that order. Ties go to the earlier workout.
pub fn best_sets(workouts: &[Workout], exercise_id: &str) -> Vec<BestSet> {
    let lifts: Vec<(f64, u32, DateTime<Utc>)> = chronological(workouts)
        .into_iter()
        .flat_map(move |workout| {
            occurrences(workout, exercise_id)
                .flat_map(|we| we.completed_sets())
                .filter_map(move |set| match (set.weight, set.reps) {
                    (Some(weight), Some(reps)) => Some((weight, reps, workout.start_time)),
                    _ => None,
                })
        })
        .collect();

    let Some(heaviest) = first_max_by(&lifts, |a, b| a.0 > b.0) else {
        return Vec::new();
    };
    let threshold = heaviest.0 * MOST_REPS_MIN_SHARE;
    let strong: Vec<_> = lifts.iter().copied().filter(|l| l.0 >= threshold).collect();
    let most_reps = first_max_by(&strong, |a, b| a.1 > b.1).unwrap_or(heaviest);
    let highest_volume =
        first_max_by(&lifts, |a, b| a.0 * f64::from(a.1) > b.0 * f64::from(b.1))
            .unwrap_or(heaviest);

    [
        (BestSetKind::HeaviestWeight, heaviest),
        (BestSetKind::MostReps, most_reps),
        (BestSetKind::HighestVolume, highest_volume),
    ]
    .into_iter()
    .map(|(kind, (weight, reps, date))| BestSet {
        kind,
        weight,
        reps,
        date,
    })
    .collect()
}

/// Heaviest completed weight per workout containing the exercise, oldest
/// first. Workouts without a positive weight are left out.
pub fn weight_progression(workouts: &[Workout], exercise_id: &str) -> Vec<(DateTime<Utc>, f64)> {
    progression(workouts, exercise_id, |we| {
        we.completed_sets()
            .filter_map(|set| set.weight)
            .fold(0.0, f64::max)
    })
}

/// Completed volume per workout containing the exercise, oldest first.
pub fn volume_progression(workouts: &[Workout], exercise_id: &str) -> Vec<(DateTime<Utc>, f64)> {
    progression(workouts, exercise_id, WorkoutExercise::total_volume)
}

fn progression(
    workouts: &[Workout],
    exercise_id: &str,
    value: impl Fn(&WorkoutExercise) -> f64,
) -> Vec<(DateTime<Utc>, f64)> {
    chronological(workouts)
        .into_iter()
        .flat_map(move |workout| {
            occurrences(workout, exercise_id).map(move |we| (workout.start_time, we))
        })
        .map(|(date, we)| (date, value(we)))
        .filter(|(_, v)| *v > 0.0)
        .collect()
}

fn chronological(workouts: &[Workout]) -> Vec<&Workout> {
    let mut ordered: Vec<&Workout> = workouts.iter().collect();
    ordered.sort_by_key(|w| w.start_time);
    ordered
}

fn occurrences<'a>(
    workout: &'a Workout,
    exercise_id: &'a str,
) -> impl Iterator<Item = &'a WorkoutExercise> {
    workout
        .exercises
        .iter()
        .filter(move |we| we.exercise.id == exercise_id)
}

/// First element for which no later one is strictly better.
fn first_max_by<T: Copy>(items: &[T], better: impl Fn(&T, &T) -> bool) -> Option<T> {
    let mut best: Option<T> = None;
    for item in items {
        if best.map_or(true, |current| better(item, &current)) {
            best = Some(*item);
        }
    }
    best
}
