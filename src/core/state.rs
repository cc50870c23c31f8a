//! # Application State
//!
//! Core state for Citadel. No TUI types here; presentation state lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── phase: Phase                 // intro animation or portfolio
//! ├── intro: IntroSequencer        // boot script, typewriter, transition
//! ├── router: Router               // pages, overlays, prompt, history
//! ├── clock: Arc<dyn Clock>        // injectable "now"
//! ├── notice: Option<Notice>       // transient status line
//! ├── content_origin: ContentOrigin
//! └── offline: bool                // never call the content API
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::content::{Catalog, ContentOrigin};
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::ResolvedConfig;
use crate::core::intro::{IntroSequencer, RandomPace, TypingPace};
use crate::core::router::Router;

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Portfolio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>, level: NoticeLevel, now: Instant) -> Self {
        Self {
            text: text.into(),
            level,
            expires_at: now + NOTICE_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub struct App {
    pub phase: Phase,
    pub intro: IntroSequencer,
    pub router: Router,
    pub clock: Arc<dyn Clock>,
    pub notice: Option<Notice>,
    pub content_origin: ContentOrigin,
    pub offline: bool,
}

impl App {
    pub fn new(
        clock: Arc<dyn Clock>,
        pace: Box<dyn TypingPace>,
        catalog: Catalog,
        suggestion_period: Duration,
    ) -> Self {
        let now = clock.now();
        Self {
            phase: Phase::Intro,
            intro: IntroSequencer::new(now, pace),
            router: Router::new(catalog, suggestion_period),
            clock,
            notice: None,
            content_origin: ContentOrigin::Builtin,
            offline: false,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let (min, max) = config.typing_delay_ms;
        let mut app = Self::new(
            Arc::new(SystemClock),
            Box::new(RandomPace::new(min, max)),
            Catalog::builtin(),
            config.suggestion_interval,
        );
        app.offline = config.offline;
        if config.skip_intro {
            app.enter_portfolio();
        }
        app
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Hand-off from the intro. Safe to call more than once.
    pub fn enter_portfolio(&mut self) {
        if self.phase == Phase::Portfolio {
            return;
        }
        let now = self.now();
        self.phase = Phase::Portfolio;
        self.router.activate(now);
    }

    pub fn show_notice(&mut self, text: impl Into<String>, level: NoticeLevel) {
        let now = self.now();
        self.notice = Some(Notice::new(text, level, now));
    }
}
