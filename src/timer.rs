//! Time sources for the session: a wall clock and one-second intervals.
//!
//! Both are injected so hosts can drive them from their own event loop and
//! tests can advance them deterministically.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Workout elapsed-time clock.
    Elapsed,
    /// Rest countdown between sets.
    Rest,
}

/// Identifies one scheduled interval. Never reused, so a tick carrying a
/// cancelled handle can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntervalHandle {
    id: u64,
    kind: TimerKind,
}

impl IntervalHandle {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

/// Something that delivers a tick per second for each live interval by
/// calling `WorkoutSession::on_tick(handle)`.
pub trait Scheduler {
    fn schedule_interval(&mut self, kind: TimerKind) -> IntervalHandle;
    fn cancel(&mut self, handle: IntervalHandle);
}

#[derive(Debug, Default)]
struct Intervals {
    next_id: u64,
    active: BTreeMap<u64, TimerKind>,
}

/// Bookkeeping scheduler. The host's once-per-second loop reads
/// [`ManualScheduler::active`] and forwards each handle to the session.
/// Clones share the same interval table.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Intervals>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Vec<IntervalHandle> {
        self.inner
            .borrow()
            .active
            .iter()
            .map(|(&id, &kind)| IntervalHandle { id, kind })
            .collect()
    }

    pub fn is_active(&self, kind: TimerKind) -> bool {
        self.inner.borrow().active.values().any(|k| *k == kind)
    }

    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_interval(&mut self, kind: TimerKind) -> IntervalHandle {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.active.insert(id, kind);
        IntervalHandle { id, kind }
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        self.inner.borrow_mut().active.remove(&handle.id);
    }
}
