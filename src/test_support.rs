//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::content::Catalog;
use crate::core::clock::Clock;
use crate::core::intro::TypingPace;
use crate::core::router::Router;
use crate::core::state::App;
use crate::core::suggest::DEFAULT_CYCLE_PERIOD;

/// A clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

/// Typing pace with a constant per-character delay.
pub struct FixedPace(pub Duration);

impl TypingPace for FixedPace {
    fn next_delay(&mut self) -> Duration {
        self.0
    }
}

/// A router over the built-in catalog with the default suggestion period.
pub fn test_router() -> Router {
    Router::new(Catalog::builtin(), DEFAULT_CYCLE_PERIOD)
}

/// A fresh app in the intro phase, plus the clock that drives it.
pub fn test_app() -> (App, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let app = App::new(
        clock.clone(),
        Box::new(FixedPace(Duration::from_millis(50))),
        Catalog::builtin(),
        DEFAULT_CYCLE_PERIOD,
    );
    (app, clock)
}

/// An app that has already handed off to the portfolio.
pub fn portfolio_app() -> (App, Arc<ManualClock>) {
    let (mut app, clock) = test_app();
    app.enter_portfolio();
    (app, clock)
}
