//! Rest timer policy and countdown state machine.
//!
//! The timer never schedules anything itself: every operation returns the
//! [`RestTimerEvent`]s it produced, and the session forwards them to the
//! notifier and keeps the tick interval in step with [`RestTimer::is_active`].

use serde::Serialize;

use crate::models::SetType;

/// Rest used when there is no set to derive a duration from.
pub const DEFAULT_REST_SECONDS: u32 = 90;

impl SetType {
    pub fn rest_seconds(&self) -> u32 {
        match self {
            SetType::Warmup => 60,
            SetType::Working => 120,
            SetType::DropSet => 60,
            SetType::ToFailure => 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestPolicy {
    default_seconds: u32,
}

impl Default for RestPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_REST_SECONDS)
    }
}

impl RestPolicy {
    pub fn new(default_seconds: u32) -> Self {
        Self { default_seconds }
    }

    pub fn duration_for(&self, set_type: Option<SetType>) -> u32 {
        set_type.map_or(self.default_seconds, |t| t.rest_seconds())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RestTimerState {
    #[default]
    Idle,
    Running,
    Paused,
}

/// What the live-activity surface needs to mirror the timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum RestTimerEvent {
    #[serde(rename_all = "camelCase")]
    Started {
        exercise_name: String,
        set_label: String,
        total_duration_seconds: u32,
    },
    #[serde(rename_all = "camelCase")]
    Updated {
        remaining_seconds: u32,
        is_paused: bool,
    },
    /// The countdown reached zero. Sent once, right before `Ended`.
    Finished,
    Ended,
}

#[derive(Debug, Clone, Default)]
pub struct RestTimer {
    state: RestTimerState,
    remaining: u32,
    total: u32,
    exercise_name: String,
    set_label: String,
}

impl RestTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RestTimerState {
        self.state
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_active(&self) -> bool {
        self.state != RestTimerState::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.state == RestTimerState::Paused
    }

    /// Start a fresh countdown, ending any timer that is already active.
    pub fn start(
        &mut self,
        duration: u32,
        exercise_name: &str,
        set_label: &str,
    ) -> Vec<RestTimerEvent> {
        let mut events: Vec<RestTimerEvent> = self.stop().into_iter().collect();

        self.state = RestTimerState::Running;
        self.remaining = duration;
        self.total = duration;
        self.exercise_name = exercise_name.to_string();
        self.set_label = set_label.to_string();

        events.push(RestTimerEvent::Started {
            exercise_name: self.exercise_name.clone(),
            set_label: self.set_label.clone(),
            total_duration_seconds: duration,
        });
        events
    }

    pub fn pause(&mut self) -> Option<RestTimerEvent> {
        if self.state != RestTimerState::Running {
            return None;
        }
        self.state = RestTimerState::Paused;
        Some(self.snapshot())
    }

    pub fn resume(&mut self) -> Option<RestTimerEvent> {
        if self.state != RestTimerState::Paused {
            return None;
        }
        self.state = RestTimerState::Running;
        Some(self.snapshot())
    }

    /// Extend an active timer, or start a new one of `seconds` when idle.
    /// An idle timer reuses the labels of the last one.
    pub fn add_time(&mut self, seconds: u32) -> Vec<RestTimerEvent> {
        if self.is_active() {
            self.remaining = self.remaining.saturating_add(seconds);
            self.total = self.total.saturating_add(seconds);
            return vec![self.snapshot()];
        }

        let exercise_name = std::mem::take(&mut self.exercise_name);
        let set_label = std::mem::take(&mut self.set_label);
        self.start(seconds, &exercise_name, &set_label)
    }

    /// Advance one second. Paused and idle timers ignore ticks.
    pub fn tick(&mut self) -> Vec<RestTimerEvent> {
        if self.state != RestTimerState::Running {
            return Vec::new();
        }

        self.remaining = self.remaining.saturating_sub(1);
        let mut events = vec![self.snapshot()];

        if self.remaining == 0 {
            events.push(RestTimerEvent::Finished);
            events.extend(self.stop());
        }
        events
    }

    /// Skip or stop: back to idle, discarding the remaining time.
    pub fn stop(&mut self) -> Option<RestTimerEvent> {
        if !self.is_active() {
            return None;
        }
        self.state = RestTimerState::Idle;
        self.remaining = 0;
        self.total = 0;
        Some(RestTimerEvent::Ended)
    }

    fn snapshot(&self) -> RestTimerEvent {
        RestTimerEvent::Updated {
            remaining_seconds: self.remaining,
            is_paused: self.is_paused(),
        }
    }
}
