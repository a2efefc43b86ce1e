//! Time sources for the tracker.

use std::cell::Cell;

use jiff::{SignedDuration, Timestamp};

/// Source of "now" for transitions.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Manually driven clock for deterministic runs.
///
/// ```rust
/// use jiff::SignedDuration;
/// use shiftboard_core::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new("2025-03-01T09:00:00Z".parse().unwrap());
/// clock.advance(SignedDuration::from_mins(30));
/// assert_eq!(clock.now().to_string(), "2025-03-01T09:30:00Z");
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    pub fn advance(&self, by: SignedDuration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
