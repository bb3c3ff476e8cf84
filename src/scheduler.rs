//! Deferred-hide scheduling
//!
//! The toolbar hides after a delay so that a click on the toolbar itself, or
//! focus moving to another input, can cancel the hide that the blur requested.
//! The timer is a single deadline slot polled by the host event loop; there is
//! no background thread.

use std::cell::Cell;
use std::fmt;
use std::time::{Duration, Instant};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for deterministic timing
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Single-slot deadline timer
///
/// Scheduling replaces whatever was pending. A timer scheduled with a zero
/// delay is still only reported by [`HideTimer::take_due`], never fired inline.
#[derive(Default)]
pub struct HideTimer {
    deadline: Option<Instant>,
    /// Bumped on every schedule; identifies which request a fire belongs to
    generation: u64,
}

impl HideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer for `now + delay`, replacing any pending deadline
    ///
    /// Returns the generation of the new request.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now + delay);
        self.generation
    }

    /// Disarm the timer. Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// If the deadline has passed, clear the slot and return the generation that fired
    pub fn take_due(&mut self, now: Instant) -> Option<u64> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.generation)
            }
            _ => None,
        }
    }
}

impl fmt::Debug for HideTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HideTimer")
            .field("pending", &self.deadline.is_some())
            .field("generation", &self.generation)
            .finish()
    }
}
