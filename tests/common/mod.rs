#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use ironlog::config::Config;
use ironlog::db::{create_memory_pool, DbPool};
use ironlog::migrations::run_migrations_for_tests;
use ironlog::models::{CreateExercise, Equipment, Exercise, MuscleGroup, Workout};
use ironlog::notifier::{NotifyError, RestTimerNotifier};
use ironlog::repositories::ExerciseRepository;
use ironlog::rest_timer::RestTimerEvent;
use ironlog::timer::{ManualClock, ManualScheduler, TimerKind};
use ironlog::WorkoutSession;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 18, 0, 0).unwrap()
}

/// Keeps every event it receives; clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Rc<RefCell<Vec<RestTimerEvent>>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<RestTimerEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl RestTimerNotifier for RecordingNotifier {
    fn notify(&mut self, event: &RestTimerEvent) -> Result<(), NotifyError> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

pub struct FailingNotifier;

impl RestTimerNotifier for FailingNotifier {
    fn notify(&mut self, _event: &RestTimerEvent) -> Result<(), NotifyError> {
        Err(NotifyError::Delivery("live activity unavailable".to_string()))
    }
}

pub struct TestSession {
    pub session: WorkoutSession,
    pub clock: ManualClock,
    pub scheduler: ManualScheduler,
    pub notifier: RecordingNotifier,
}

impl TestSession {
    /// Deliver `times` ticks to every live interval of `kind`.
    pub fn tick(&mut self, kind: TimerKind, times: u32) {
        for _ in 0..times {
            for handle in self.scheduler.active() {
                if handle.kind() == kind {
                    self.session.on_tick(handle);
                }
            }
        }
    }
}

pub fn create_test_session(pool: &DbPool) -> TestSession {
    create_test_session_with(pool, Config::default(), ManualClock::new(start_time()))
}

pub fn create_test_session_with(pool: &DbPool, config: Config, clock: ManualClock) -> TestSession {
    let scheduler = ManualScheduler::new();
    let notifier = RecordingNotifier::default();
    let session = WorkoutSession::new(
        pool.clone(),
        &config,
        Box::new(clock.clone()),
        Box::new(scheduler.clone()),
        Box::new(notifier.clone()),
    );

    TestSession {
        session,
        clock,
        scheduler,
        notifier,
    }
}

pub fn create_test_exercise(pool: &DbPool, name: &str, muscle_group: MuscleGroup) -> Exercise {
    ExerciseRepository::new(pool.clone())
        .create(
            &CreateExercise {
                name: name.to_string(),
                muscle_group,
                equipment: Equipment::Barbell,
            },
            false,
        )
        .unwrap()
}

/// Log and finish a one-exercise workout with the given completed sets, then
/// move the clock to the next day.
pub fn log_workout(t: &mut TestSession, exercise_id: &str, sets: &[(f64, u32)]) -> Workout {
    t.session.start_new_workout(None).unwrap();
    let we_id = t.session.add_exercise(exercise_id).unwrap().id.clone();

    // Sets prefilled from earlier history are reused in order; extras go.
    let prefilled: Vec<String> = t.session.current_workout().unwrap().exercises[0]
        .sets
        .iter()
        .map(|s| s.id.clone())
        .collect();

    for (i, (weight, reps)) in sets.iter().enumerate() {
        let set_id = match prefilled.get(i) {
            Some(id) => {
                t.session.update_set(id, Some(*weight), Some(*reps)).unwrap();
                id.clone()
            }
            None => t
                .session
                .add_set(&we_id, Some(*weight), Some(*reps))
                .unwrap()
                .id
                .clone(),
        };
        t.session.complete_set(&set_id).unwrap();
    }
    for id in prefilled.iter().skip(sets.len()).rev() {
        t.session.delete_set(id).unwrap();
    }

    t.clock.advance(Duration::hours(1));
    let workout = t.session.finish_workout().unwrap();
    t.clock.advance(Duration::days(1));
    workout
}
