//! The live workout session.
//!
//! `WorkoutSession` owns the in-progress [`Workout`], drives the elapsed clock
//! and the rest timer through the injected [`Scheduler`], and writes every
//! change through the repositories before applying it in memory.

use std::collections::BTreeSet;

use crate::config::Config;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, ExerciseSet, SetType, Workout, WorkoutExercise};
use crate::notifier::RestTimerNotifier;
use crate::personal_record;
use crate::progress::{self, ProgressIndicator};
use crate::repositories::{ExerciseRepository, TemplateRepository, WorkoutRepository};
use crate::rest_timer::{RestPolicy, RestTimer, RestTimerEvent, RestTimerState};
use crate::timer::{Clock, IntervalHandle, Scheduler, TimerKind};

/// Weight and reps to seed a new set with.
type Prefill = (Option<f64>, Option<u32>);

const EMPTY_SET: Prefill = (None, None);

pub struct WorkoutSession {
    exercises: ExerciseRepository,
    workouts: WorkoutRepository,
    templates: TemplateRepository,
    rest_policy: RestPolicy,
    max_sets_per_exercise: u32,
    clock: Box<dyn Clock>,
    scheduler: Box<dyn Scheduler>,
    notifier: Box<dyn RestTimerNotifier>,
    current: Option<Workout>,
    elapsed_seconds: u64,
    elapsed_interval: Option<IntervalHandle>,
    rest_interval: Option<IntervalHandle>,
    rest_timer: RestTimer,
}

impl WorkoutSession {
    pub fn new(
        pool: DbPool,
        config: &Config,
        clock: Box<dyn Clock>,
        scheduler: Box<dyn Scheduler>,
        notifier: Box<dyn RestTimerNotifier>,
    ) -> Self {
        Self {
            exercises: ExerciseRepository::new(pool.clone()),
            workouts: WorkoutRepository::new(pool.clone()),
            templates: TemplateRepository::new(pool),
            rest_policy: config.rest_policy(),
            max_sets_per_exercise: config.max_sets_per_exercise,
            clock,
            scheduler,
            notifier,
            current: None,
            elapsed_seconds: 0,
            elapsed_interval: None,
            rest_interval: None,
            rest_timer: RestTimer::new(),
        }
    }

    // Observable state

    pub fn current_workout(&self) -> Option<&Workout> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_timer_running(&self) -> bool {
        self.elapsed_interval.is_some()
    }

    pub fn rest_time_remaining(&self) -> u32 {
        self.rest_timer.remaining()
    }

    pub fn rest_time_total(&self) -> u32 {
        self.rest_timer.total()
    }

    pub fn rest_timer_state(&self) -> RestTimerState {
        self.rest_timer.state()
    }

    pub fn is_rest_timer_active(&self) -> bool {
        self.rest_timer.is_active()
    }

    pub fn is_rest_timer_paused(&self) -> bool {
        self.rest_timer.is_paused()
    }

    pub fn total_volume(&self) -> f64 {
        self.current.as_ref().map_or(0.0, Workout::total_volume)
    }

    pub fn total_sets_completed(&self) -> usize {
        self.current.as_ref().map_or(0, Workout::total_sets)
    }

    // Lifecycle

    /// Start an empty workout. Fails if this session already has one, or if
    /// an unfinished workout is still stored (restore it with
    /// [`load_in_progress_workout`](Self::load_in_progress_workout) instead).
    pub fn start_new_workout(&mut self, name: Option<&str>) -> Result<&Workout> {
        self.begin_workout(name, None)?;
        self.active()
    }

    /// Resume the stored unfinished workout, if any. The elapsed clock is
    /// recomputed from the workout's start time.
    pub fn load_in_progress_workout(&mut self) -> Result<Option<&Workout>> {
        if self.current.is_none() {
            if let Some(workout) = self.workouts.find_in_progress()? {
                let elapsed = (self.clock.now() - workout.start_time).num_seconds().max(0) as u64;
                tracing::info!(workout_id = %workout.id, elapsed, "Restored in-progress workout");
                self.activate(workout, elapsed);
            }
        }
        Ok(self.current.as_ref())
    }

    pub fn finish_workout(&mut self) -> Result<Workout> {
        let workout_id = self.active()?.id.clone();
        let end_time = self.clock.now();

        if !self.workouts.finish(&workout_id, end_time)? {
            return Err(AppError::NotFound(format!("Workout {workout_id} not found")));
        }

        let mut workout = self.teardown().ok_or(AppError::NoActiveSession)?;
        workout.end_time = Some(end_time);
        tracing::info!(
            workout_id = %workout.id,
            total_volume = workout.total_volume(),
            sets = workout.total_sets(),
            "Finished workout"
        );
        Ok(workout)
    }

    /// Discard the workout and everything logged in it.
    pub fn cancel_workout(&mut self) -> Result<()> {
        let workout_id = self.active()?.id.clone();
        self.workouts.delete(&workout_id)?;
        self.teardown();
        tracing::info!(workout_id = %workout_id, "Cancelled workout");
        Ok(())
    }

    /// Start a workout named after the template, seeding each exercise with
    /// the template's set count.
    pub fn start_from_template(&mut self, template_id: &str) -> Result<&Workout> {
        let template = self
            .templates
            .find_by_id(template_id)?
            .ok_or_else(|| AppError::NotFound(format!("Template {template_id} not found")))?;

        self.begin_workout(Some(&template.name), Some(&template.id))?;

        for entry in &template.exercises {
            let previous = self.previous_workout_exercise(&entry.exercise.id)?;
            let completed: Vec<&ExerciseSet> = previous
                .as_ref()
                .map(|we| we.completed_sets().collect())
                .unwrap_or_default();
            let count = entry.default_sets.min(self.max_sets_per_exercise).max(1) as usize;
            let prefill: Vec<Prefill> = (0..count)
                .map(|i| completed.get(i).map_or(EMPTY_SET, |set| (set.weight, set.reps)))
                .collect();
            self.append_exercise(&entry.exercise, &prefill)?;
        }

        self.templates.touch_last_used(&template.id, self.clock.now())?;
        self.active()
    }

    /// Start a new workout that copies a past one's exercises and completed
    /// sets.
    pub fn repeat_workout(&mut self, past_workout_id: &str) -> Result<&Workout> {
        let past = self
            .workouts
            .find_by_id(past_workout_id)?
            .ok_or_else(|| AppError::NotFound(format!("Workout {past_workout_id} not found")))?;

        self.begin_workout(past.name.as_deref(), None)?;

        for we in &past.exercises {
            let prefill = self.prefill_from_past(we);
            self.append_exercise(&we.exercise, &prefill)?;
        }
        self.active()
    }

    // Exercises

    /// Append a catalog exercise with one set, prefilled from the first
    /// completed set of its most recent finished occurrence.
    pub fn add_exercise(&mut self, exercise_id: &str) -> Result<&WorkoutExercise> {
        self.active()?;
        let exercise = self
            .exercises
            .find_by_id(exercise_id)?
            .ok_or_else(|| AppError::NotFound(format!("Exercise {exercise_id} not found")))?;

        let prefill = self
            .previous_workout_exercise(exercise_id)?
            .and_then(|we| we.completed_sets().next().map(|set| (set.weight, set.reps)))
            .unwrap_or(EMPTY_SET);

        self.append_exercise(&exercise, &[prefill])
    }

    /// Append the exercise from a past workout along with its completed sets.
    pub fn add_exercise_from_past(
        &mut self,
        past_workout_exercise_id: &str,
    ) -> Result<&WorkoutExercise> {
        self.active()?;
        let past = self
            .workouts
            .find_workout_exercise(past_workout_exercise_id)?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Workout exercise {past_workout_exercise_id} not found"
                ))
            })?;

        let prefill = self.prefill_from_past(&past);
        self.append_exercise(&past.exercise, &prefill)
    }

    /// Remove an exercise and its sets; later exercises move up one place.
    pub fn remove_exercise(&mut self, workout_exercise_id: &str) -> Result<()> {
        let index = self.exercise_index(workout_exercise_id)?;
        self.workouts.delete_workout_exercise(workout_exercise_id)?;

        let workout = self.active_mut()?;
        workout.exercises.remove(index);
        for (order, we) in workout.exercises.iter_mut().enumerate() {
            we.order = order as u32;
        }
        tracing::debug!(workout_exercise_id, "Removed exercise");
        Ok(())
    }

    /// Move the exercises at `from_indices` so they sit before the exercise
    /// currently at `to_index` (`to_index == len` moves them to the end).
    /// Moved exercises keep their relative order.
    pub fn reorder_exercises(&mut self, from_indices: &[usize], to_index: usize) -> Result<()> {
        let workout = self.active()?;
        let len = workout.exercises.len();
        let from: BTreeSet<usize> = from_indices.iter().copied().collect();
        if to_index > len || from.iter().any(|&i| i >= len) {
            return Err(AppError::Validation(format!(
                "Cannot move exercises {from_indices:?} to {to_index} in a list of {len}"
            )));
        }

        let workout_id = workout.id.clone();
        let ids: Vec<String> = workout.exercises.iter().map(|we| we.id.clone()).collect();
        let reordered = move_indices(ids, &from, to_index);
        let id_refs: Vec<&str> = reordered.iter().map(String::as_str).collect();
        self.workouts.reorder_exercises(&workout_id, &id_refs)?;

        let workout = self.active_mut()?;
        for we in &mut workout.exercises {
            if let Some(position) = reordered.iter().position(|id| *id == we.id) {
                we.order = position as u32;
            }
        }
        workout.exercises.sort_by_key(|we| we.order);
        Ok(())
    }

    pub fn update_exercise_notes(
        &mut self,
        workout_exercise_id: &str,
        notes: Option<&str>,
    ) -> Result<()> {
        let index = self.exercise_index(workout_exercise_id)?;
        let notes = non_blank(notes);
        self.workouts
            .update_exercise_notes(workout_exercise_id, notes.as_deref())?;
        self.active_mut()?.exercises[index].notes = notes;
        Ok(())
    }

    // Sets

    pub fn add_set(
        &mut self,
        workout_exercise_id: &str,
        weight: Option<f64>,
        reps: Option<u32>,
    ) -> Result<&ExerciseSet> {
        validate_weight(weight)?;
        let index = self.exercise_index(workout_exercise_id)?;
        let we = &self.active()?.exercises[index];
        if we.sets.len() as u32 >= self.max_sets_per_exercise {
            return Err(AppError::Validation(format!(
                "{} already has {} sets",
                we.exercise.name, self.max_sets_per_exercise
            )));
        }

        let set = self
            .workouts
            .add_set(workout_exercise_id, we.next_set_number(), weight, reps)?;
        tracing::debug!(set_id = %set.id, set_number = set.set_number, "Added set");

        let sets = &mut self.active_mut()?.exercises[index].sets;
        sets.push(set);
        Ok(&sets[sets.len() - 1])
    }

    /// Overwrite weight and reps. A completed set keeps its PR flag.
    pub fn update_set(&mut self, set_id: &str, weight: Option<f64>, reps: Option<u32>) -> Result<()> {
        validate_weight(weight)?;
        self.modify_set(set_id, |set| {
            set.weight = weight;
            set.reps = reps;
        })?;
        Ok(())
    }

    pub fn update_set_type(&mut self, set_id: &str, set_type: SetType) -> Result<()> {
        self.modify_set(set_id, |set| set.set_type = set_type)?;
        Ok(())
    }

    pub fn update_set_rpe(&mut self, set_id: &str, rpe: Option<u8>) -> Result<()> {
        if let Some(rpe) = rpe {
            if !(1..=10).contains(&rpe) {
                return Err(AppError::Validation(format!("RPE must be 1-10, got {rpe}")));
            }
        }
        self.modify_set(set_id, |set| set.rpe = rpe)?;
        Ok(())
    }

    /// Mark a set done: stamp it, decide its PR flag against finished
    /// workouts, and start the rest timer for its set type. Returns whether
    /// the set is a personal record.
    ///
    /// The flag is decided on the first completion only. Completing an
    /// already stamped set keeps its timestamp and flag and just restarts the
    /// rest timer.
    pub fn complete_set(&mut self, set_id: &str) -> Result<bool> {
        let (exercise_index, set_index) = self.locate_set(set_id)?;
        let workout = self.active()?;
        let workout_id = workout.id.clone();
        let we = &workout.exercises[exercise_index];
        let exercise_id = we.exercise.id.clone();
        let exercise_name = we.exercise.name.clone();

        let stored = &we.sets[set_index];
        if stored.completed_at.is_some() {
            let is_pr = stored.is_personal_record;
            let duration = self.rest_policy.duration_for(Some(stored.set_type));
            let label = stored.label();
            tracing::debug!(set_id, is_pr, "Set already completed");

            let events = self.rest_timer.start(duration, &exercise_name, &label);
            self.dispatch(events);
            return Ok(is_pr);
        }

        let mut candidate = stored.clone();
        candidate.completed_at = Some(self.clock.now());
        candidate.is_personal_record =
            personal_record::evaluate(&candidate, &exercise_id, &workout_id, &self.workouts)?;

        self.workouts.update_set(&candidate)?;
        tracing::debug!(
            set_id,
            weight = ?candidate.weight,
            reps = ?candidate.reps,
            is_pr = candidate.is_personal_record,
            "Completed set"
        );

        let is_pr = candidate.is_personal_record;
        let duration = self.rest_policy.duration_for(Some(candidate.set_type));
        let label = candidate.label();
        self.active_mut()?.exercises[exercise_index].sets[set_index] = candidate;

        let events = self.rest_timer.start(duration, &exercise_name, &label);
        self.dispatch(events);
        Ok(is_pr)
    }

    /// Delete a set; the exercise's remaining sets are renumbered from 1.
    pub fn delete_set(&mut self, set_id: &str) -> Result<()> {
        let (exercise_index, set_index) = self.locate_set(set_id)?;
        self.workouts.delete_set(set_id)?;

        let sets = &mut self.active_mut()?.exercises[exercise_index].sets;
        sets.remove(set_index);
        for (i, set) in sets.iter_mut().enumerate() {
            set.set_number = i as u32 + 1;
        }
        tracing::debug!(set_id, "Deleted set");
        Ok(())
    }

    // Workout details

    pub fn rename_workout(&mut self, name: Option<&str>) -> Result<()> {
        let workout_id = self.active()?.id.clone();
        let name = non_blank(name);
        self.workouts.update_name(&workout_id, name.as_deref())?;
        self.active_mut()?.name = name;
        Ok(())
    }

    pub fn update_workout_notes(&mut self, notes: Option<&str>) -> Result<()> {
        let workout_id = self.active()?.id.clone();
        let notes = non_blank(notes);
        self.workouts.update_notes(&workout_id, notes.as_deref())?;
        self.active_mut()?.notes = notes;
        Ok(())
    }

    // History lookups

    /// The most recent finished occurrence of an exercise before this
    /// workout started (or before now, with no workout active).
    pub fn previous_workout_exercise(&self, exercise_id: &str) -> Result<Option<WorkoutExercise>> {
        let before = self
            .current
            .as_ref()
            .map_or_else(|| self.clock.now(), |w| w.start_time);
        self.workouts.previous_workout_exercise(exercise_id, before)
    }

    /// Arrow for a set against the same-numbered set last time.
    pub fn progress_for_set(&self, set_id: &str) -> Result<ProgressIndicator> {
        let (exercise_index, set_index) = self.locate_set(set_id)?;
        let we = &self.active()?.exercises[exercise_index];
        let set = &we.sets[set_index];

        let previous = self.previous_workout_exercise(&we.exercise.id)?;
        let previous_set = previous
            .as_ref()
            .and_then(|occurrence| progress::previous_set_for(set, occurrence));
        Ok(progress::compare(set, previous_set))
    }

    // Rest timer

    /// Start a rest countdown by hand. Without a duration the configured
    /// default applies.
    pub fn start_rest_timer(&mut self, duration: Option<u32>) -> Result<()> {
        let label = self.active()?.display_name();
        let duration = duration.unwrap_or_else(|| self.rest_policy.duration_for(None));
        let events = self.rest_timer.start(duration, &label, "Rest");
        self.dispatch(events);
        Ok(())
    }

    pub fn pause_rest_timer(&mut self) -> bool {
        let event = self.rest_timer.pause();
        let changed = event.is_some();
        self.dispatch(event.into_iter().collect());
        changed
    }

    pub fn resume_rest_timer(&mut self) -> bool {
        let event = self.rest_timer.resume();
        let changed = event.is_some();
        self.dispatch(event.into_iter().collect());
        changed
    }

    pub fn skip_rest_timer(&mut self) -> bool {
        let event = self.rest_timer.stop();
        let changed = event.is_some();
        self.dispatch(event.into_iter().collect());
        changed
    }

    pub fn add_rest_time(&mut self, seconds: u32) -> Result<()> {
        self.active()?;
        let events = self.rest_timer.add_time(seconds);
        self.dispatch(events);
        Ok(())
    }

    /// Deliver one scheduler tick. Ticks from cancelled intervals are ignored.
    pub fn on_tick(&mut self, handle: IntervalHandle) {
        if self.elapsed_interval == Some(handle) {
            self.elapsed_seconds += 1;
        } else if self.rest_interval == Some(handle) {
            let events = self.rest_timer.tick();
            self.dispatch(events);
        } else {
            tracing::debug!(?handle, "Ignoring tick from stale interval");
        }
    }

    // Internals

    fn active(&self) -> Result<&Workout> {
        self.current.as_ref().ok_or(AppError::NoActiveSession)
    }

    fn active_mut(&mut self) -> Result<&mut Workout> {
        self.current.as_mut().ok_or(AppError::NoActiveSession)
    }

    fn begin_workout(&mut self, name: Option<&str>, template_id: Option<&str>) -> Result<()> {
        if self.current.is_some() {
            return Err(AppError::SessionActive);
        }
        if let Some(existing) = self.workouts.find_in_progress()? {
            return Err(AppError::InProgressWorkoutExists(existing.id));
        }

        let workout = self
            .workouts
            .create_workout(self.clock.now(), name, template_id)?;
        tracing::info!(workout_id = %workout.id, ?template_id, "Started workout");
        self.activate(workout, 0);
        Ok(())
    }

    fn activate(&mut self, workout: Workout, elapsed_seconds: u64) {
        self.current = Some(workout);
        self.elapsed_seconds = elapsed_seconds;
        if let Some(handle) = self.elapsed_interval.take() {
            self.scheduler.cancel(handle);
        }
        self.elapsed_interval = Some(self.scheduler.schedule_interval(TimerKind::Elapsed));
    }

    /// Stop every clock and drop the in-memory workout.
    fn teardown(&mut self) -> Option<Workout> {
        if let Some(handle) = self.elapsed_interval.take() {
            self.scheduler.cancel(handle);
        }
        let events: Vec<RestTimerEvent> = self.rest_timer.stop().into_iter().collect();
        self.dispatch(events);
        self.elapsed_seconds = 0;
        self.current.take()
    }

    fn append_exercise(
        &mut self,
        exercise: &Exercise,
        prefill: &[Prefill],
    ) -> Result<&WorkoutExercise> {
        let workout = self.active()?;
        let workout_id = workout.id.clone();
        let order = workout.exercises.len() as u32;

        let mut we = self.workouts.add_exercise(&workout_id, exercise, order)?;
        for (i, (weight, reps)) in prefill.iter().enumerate() {
            let set = self.workouts.add_set(&we.id, i as u32 + 1, *weight, *reps)?;
            we.sets.push(set);
        }
        tracing::debug!(
            exercise = %exercise.name,
            order,
            sets = we.sets.len(),
            "Added exercise"
        );

        let exercises = &mut self.active_mut()?.exercises;
        exercises.push(we);
        Ok(&exercises[exercises.len() - 1])
    }

    fn prefill_from_past(&self, past: &WorkoutExercise) -> Vec<Prefill> {
        let prefill: Vec<Prefill> = past
            .completed_sets()
            .take(self.max_sets_per_exercise as usize)
            .map(|set| (set.weight, set.reps))
            .collect();
        if prefill.is_empty() {
            vec![EMPTY_SET]
        } else {
            prefill
        }
    }

    fn exercise_index(&self, workout_exercise_id: &str) -> Result<usize> {
        self.active()?
            .exercises
            .iter()
            .position(|we| we.id == workout_exercise_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Workout exercise {workout_exercise_id} not found"))
            })
    }

    fn locate_set(&self, set_id: &str) -> Result<(usize, usize)> {
        self.active()?
            .exercises
            .iter()
            .enumerate()
            .find_map(|(i, we)| {
                we.sets
                    .iter()
                    .position(|set| set.id == set_id)
                    .map(|j| (i, j))
            })
            .ok_or_else(|| AppError::NotFound(format!("Set {set_id} not found")))
    }

    fn modify_set(
        &mut self,
        set_id: &str,
        change: impl FnOnce(&mut ExerciseSet),
    ) -> Result<ExerciseSet> {
        let (exercise_index, set_index) = self.locate_set(set_id)?;
        let mut updated = self.active()?.exercises[exercise_index].sets[set_index].clone();
        change(&mut updated);

        self.workouts.update_set(&updated)?;
        self.active_mut()?.exercises[exercise_index].sets[set_index] = updated.clone();
        Ok(updated)
    }

    /// Forward timer events to the notifier and keep the rest interval
    /// scheduled exactly while the countdown is running.
    fn dispatch(&mut self, events: Vec<RestTimerEvent>) {
        for event in &events {
            if let Err(e) = self.notifier.notify(event) {
                tracing::warn!(error = %e, ?event, "Rest timer notification failed");
            }
        }

        let running = self.rest_timer.state() == RestTimerState::Running;
        match (running, self.rest_interval) {
            (true, None) => {
                self.rest_interval = Some(self.scheduler.schedule_interval(TimerKind::Rest));
            }
            (false, Some(handle)) => {
                self.scheduler.cancel(handle);
                self.rest_interval = None;
            }
            _ => {}
        }
    }
}

impl Drop for WorkoutSession {
    fn drop(&mut self) {
        for handle in [self.elapsed_interval.take(), self.rest_interval.take()]
            .into_iter()
            .flatten()
        {
            self.scheduler.cancel(handle);
        }
    }
}

fn validate_weight(weight: Option<f64>) -> Result<()> {
    match weight {
        Some(w) if !w.is_finite() || w < 0.0 => Err(AppError::Validation(format!(
            "Weight must be a non-negative number, got {w}"
        ))),
        _ => Ok(()),
    }
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Move the items at `from` to sit before position `to` of the original
/// list, preserving their relative order.
fn move_indices<T>(items: Vec<T>, from: &BTreeSet<usize>, to: usize) -> Vec<T> {
    let shift = from.iter().filter(|&&i| i < to).count();
    let mut moved = Vec::with_capacity(from.len());
    let mut rest = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        if from.contains(&i) {
            moved.push(item);
        } else {
            rest.push(item);
        }
    }
    let at = to - shift;
    rest.splice(at..at, moved);
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(from: &[usize], to: usize) -> Vec<char> {
        let set: BTreeSet<usize> = from.iter().copied().collect();
        move_indices(vec!['a', 'b', 'c', 'd'], &set, to)
    }

    #[test]
    fn test_move_single_down() {
        assert_eq!(moved(&[0], 2), vec!['b', 'a', 'c', 'd']);
        assert_eq!(moved(&[0], 4), vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_move_single_up() {
        assert_eq!(moved(&[3], 0), vec!['d', 'a', 'b', 'c']);
        assert_eq!(moved(&[2], 1), vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn test_move_in_place_is_noop() {
        assert_eq!(moved(&[1], 1), vec!['a', 'b', 'c', 'd']);
        assert_eq!(moved(&[1], 2), vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_move_several_keeps_relative_order() {
        assert_eq!(moved(&[0, 2], 4), vec!['b', 'd', 'a', 'c']);
        assert_eq!(moved(&[3, 1], 0), vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  felt strong ")), Some("felt strong".to_string()));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(None).is_ok());
        assert!(validate_weight(Some(0.0)).is_ok());
        assert!(validate_weight(Some(-5.0)).is_err());
        assert!(validate_weight(Some(f64::NAN)).is_err());
    }
}
