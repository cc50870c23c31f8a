//! # Time
//!
//! The core never calls `Instant::now()` directly. It asks a [`Clock`], so
//! tests can drive the intro animation and the suggestion cycle by hand.

use std::time::{Duration, Instant};

/// Source of "now" for everything time-dependent in the core.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock used by the real application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A repeating timer that is polled rather than called back.
///
/// The event loop calls [`IntervalTimer::poll`] on every tick; the timer
/// reports how many periods elapsed since it last fired. A disarmed timer
/// never fires, which is how the suggestion cycle is paused without leaving
/// a second timer running when it is re-armed.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_fire: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_fire: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Arms the timer so that it first fires one period after `now`.
    /// Re-arming an armed timer restarts the period.
    pub fn arm(&mut self, now: Instant) {
        self.next_fire = Some(now + self.period);
    }

    pub fn disarm(&mut self) {
        self.next_fire = None;
    }

    /// Returns how many times the timer fired up to `now`, and reschedules.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_fire else {
            return 0;
        };
        // Zero-length periods would fire forever.
        if self.period.is_zero() {
            return 0;
        }
        let mut fired = 0;
        while next <= now {
            fired += 1;
            next += self.period;
        }
        self.next_fire = Some(next);
        fired
    }
}
