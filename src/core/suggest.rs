//! # Suggestions
//!
//! A fixed list of commands cycled under the prompt as a hint, plus the
//! ghost-text and Tab-accept rules that read from the current suggestion.

use std::time::{Duration, Instant};

use crate::core::clock::IntervalTimer;

pub const SUGGESTIONS: [&str; 5] = [
    "cd podcast",
    "cd vericare",
    "cd internships",
    "cd ideas",
    "cd github",
];

pub const DEFAULT_CYCLE_PERIOD: Duration = Duration::from_secs(5);

/// Which suggestion is showing, and the timer that advances it.
#[derive(Debug, Clone)]
pub struct SuggestionCycle {
    index: usize,
    timer: IntervalTimer,
}

impl SuggestionCycle {
    pub fn new(period: Duration) -> Self {
        Self {
            index: 0,
            timer: IntervalTimer::new(period),
        }
    }

    pub fn current(&self) -> &'static str {
        SUGGESTIONS[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % SUGGESTIONS.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + SUGGESTIONS.len() - 1) % SUGGESTIONS.len();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn start(&mut self, now: Instant) {
        self.timer.arm(now);
    }

    pub fn stop(&mut self) {
        self.timer.disarm();
    }

    /// Advances once per elapsed period. Returns whether the suggestion changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self.timer.poll(now);
        for _ in 0..fired {
            self.next();
        }
        fired > 0
    }
}

/// The dimmed remainder to draw after the caret, if `suggestion` extends `input`.
///
/// Matching is case-sensitive and an empty input never shows ghost text
/// (the suggestion hint covers that case).
pub fn ghost_text<'a>(input: &str, suggestion: &'a str) -> Option<&'a str> {
    if input.is_empty() || input == suggestion {
        return None;
    }
    suggestion.strip_prefix(input)
}

/// Tab-accept: returns the full suggestion when the input is empty or a prefix of it.
pub fn accept(input: &str, suggestion: &str) -> Option<String> {
    (input.is_empty() || suggestion.starts_with(input)).then(|| suggestion.to_string())
}
