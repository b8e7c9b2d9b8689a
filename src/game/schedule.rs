//! Tick scheduling seam between the engine and its host
//!
//! The engine never owns a timer. After every tick (and on restart) it tells
//! the host when the next tick is due, and it cancels the pending tick when the
//! game ends. A terminal host backs this with a tokio deadline; tests use
//! [`ManualScheduler`] and call `tick` themselves.

use std::time::Duration;

/// Host-side timer the engine drives
pub trait Scheduler {
    /// Arrange for the next tick after `delay`, replacing any pending tick
    fn schedule_next(&mut self, delay: Duration);

    /// Drop the pending tick, if any
    fn cancel(&mut self);
}

/// A call the engine made on a [`ManualScheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleCall {
    Next(Duration),
    Cancel,
}

/// Scheduler that only records what it was asked to do
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: Option<Duration>,
    calls: Vec<ScheduleCall>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay of the tick currently scheduled, if any
    pub fn pending(&self) -> Option<Duration> {
        self.pending
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn calls(&self) -> &[ScheduleCall] {
        &self.calls
    }

    pub fn last_call(&self) -> Option<ScheduleCall> {
        self.calls.last().copied()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_next(&mut self, delay: Duration) {
        self.pending = Some(delay);
        self.calls.push(ScheduleCall::Next(delay));
    }

    fn cancel(&mut self) {
        self.pending = None;
        self.calls.push(ScheduleCall::Cancel);
    }
}
