//! # Intro Sequencer
//!
//! A scripted fake terminal session played once at startup:
//!
//! ```text
//! Pending ─► Booting ─► Banner ─► Settling ─┐
//!                                           ▼
//!            ┌──────────── Prompting ─► Typing ─► AwaitingConfirm
//!            │                                         │ confirm
//!        Advancing ◄──────── Revealing ◄───────────────┘
//!                                 │ (last command)
//!                                 ▼
//!                  Closing ─► Transition ─► Finishing ─► Holding ─► Done
//! ```
//!
//! `skip` jumps from anywhere before `Done` to a short hold and then `Done`.
//! Nothing here sleeps: every stage has a deadline and [`IntroSequencer::tick`]
//! catches up on all deadlines that have passed, so the event loop can poll
//! it at whatever rate it likes.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

mod banner {
    include!(concat!(env!("OUT_DIR"), "/banner.rs"));
}

pub use banner::{BANNER_LINES, BANNER_WIDTH};

pub const PROMPT_USER: &str = "tarushgupta";
pub const PROMPT_HOST: &str = "tarush's_macbook_pro";

pub const BOOT_MESSAGES: [&str; 4] = [
    "Initializing system...",
    "Loading kernel modules...",
    "Establishing secure connection...",
    "Authentication successful.",
];

pub const FINAL_MESSAGE: &str = "Welcome to the citadel.";

const START_DELAY: Duration = Duration::from_millis(500);
const BOOT_LINE_DELAY: Duration = Duration::from_millis(200);
const BANNER_LINE_DELAY: Duration = Duration::from_millis(100);
const SETTLE_DELAY: Duration = Duration::from_millis(400);
const PROMPT_DELAY: Duration = Duration::from_millis(500);
const REVEAL_DELAY: Duration = Duration::from_millis(300);
const ADVANCE_DELAY: Duration = Duration::from_millis(600);
const CLOSE_DELAY: Duration = Duration::from_millis(500);
const PROGRESS_STEP_DELAY: Duration = Duration::from_millis(30);
const PROGRESS_STEP: u8 = 2;
const PROGRESS_SETTLE_DELAY: Duration = Duration::from_millis(500);
const FINAL_HOLD: Duration = Duration::from_millis(1000);
const SKIP_HOLD: Duration = Duration::from_millis(500);

/// One scripted command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedCommand {
    /// Working directory shown in the prompt.
    pub path: &'static str,
    pub program: &'static str,
    /// Everything after the program name, including the leading space.
    pub args: &'static str,
    pub output: Option<&'static str>,
}

impl ScriptedCommand {
    pub fn text(&self) -> String {
        format!("{}{}", self.program, self.args)
    }

    fn len(&self) -> usize {
        self.program.chars().count() + self.args.chars().count()
    }
}

pub const SCRIPT: [ScriptedCommand; 3] = [
    ScriptedCommand {
        path: "~",
        program: "python",
        args: " who_is_tarush",
        output: Some("> 17. student. founder. builder. working on the only citadel he can control."),
    },
    ScriptedCommand {
        path: "~",
        program: "cd",
        args: " portfolio_v3",
        output: None,
    },
    ScriptedCommand {
        path: "portfolio_v3",
        program: "code",
        args: " .",
        output: None,
    },
];

/// Per-character delay source for the typewriter effect.
pub trait TypingPace: Send {
    fn next_delay(&mut self) -> Duration;
}

/// Uniformly random delay in `[min, max)` milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct RandomPace {
    min_ms: u64,
    max_ms: u64,
}

impl RandomPace {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }
}

impl Default for RandomPace {
    fn default() -> Self {
        Self::new(50, 100)
    }
}

impl TypingPace for RandomPace {
    fn next_delay(&mut self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::thread_rng().gen_range(self.min_ms..self.max_ms))
    }
}

/// A rendered line of the fake terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    Boot(&'static str),
    Banner(&'static str),
    Spacer,
    Command {
        command: ScriptedCommand,
        /// Characters typed so far.
        typed: usize,
        /// Whether the block cursor is still on this line.
        cursor: bool,
    },
    Output(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroSignal {
    /// Hand control to the router. Emitted exactly once.
    Activate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Pending,
    Booting { next: usize },
    Banner { next: usize },
    Settling,
    Prompting,
    Typing,
    AwaitingConfirm,
    Revealing,
    Advancing,
    Closing,
    Transition,
    Finishing,
    Holding,
    Skipping,
    Done,
}

pub struct IntroSequencer {
    stage: Stage,
    deadline: Option<Instant>,
    command: usize,
    transcript: Vec<TranscriptLine>,
    pace: Box<dyn TypingPace>,
    progress: u8,
    final_message: bool,
    skipped: bool,
}

impl IntroSequencer {
    pub fn new(now: Instant, pace: Box<dyn TypingPace>) -> Self {
        Self {
            stage: Stage::Pending,
            deadline: Some(now + START_DELAY),
            command: 0,
            transcript: Vec::new(),
            pace,
            progress: 0,
            final_message: false,
            skipped: false,
        }
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn awaiting_confirm(&self) -> bool {
        self.stage == Stage::AwaitingConfirm
    }

    /// True once the terminal has been replaced by the loading overlay.
    pub fn in_transition(&self) -> bool {
        matches!(
            self.stage,
            Stage::Transition | Stage::Finishing | Stage::Holding | Stage::Skipping | Stage::Done
        )
    }

    /// Loading bar, 0..=100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn final_message_visible(&self) -> bool {
        self.final_message
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    /// When the next scheduled step is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Runs every step whose deadline is at or before `now`.
    pub fn tick(&mut self, now: Instant) -> Option<IntroSignal> {
        while let Some(due) = self.deadline {
            if due > now {
                break;
            }
            if let Some(signal) = self.step(due) {
                return Some(signal);
            }
        }
        None
    }

    /// Enter (or a tap). Ignored unless a typed command is waiting.
    pub fn confirm(&mut self, now: Instant) -> bool {
        if self.stage != Stage::AwaitingConfirm {
            return false;
        }
        if let Some(TranscriptLine::Command { cursor, .. }) = self.transcript.last_mut() {
            *cursor = false;
        }
        if SCRIPT[self.command].output.is_some() {
            self.schedule(Stage::Revealing, now + REVEAL_DELAY);
        } else {
            self.after_output(now);
        }
        true
    }

    /// Tab. Skips straight to the hand-off; repeated calls do nothing.
    pub fn skip(&mut self, now: Instant) -> bool {
        if self.skipped || self.stage == Stage::Done {
            return false;
        }
        info!("Intro skipped");
        self.skipped = true;
        self.progress = 100;
        self.final_message = true;
        self.schedule(Stage::Skipping, now + SKIP_HOLD);
        true
    }

    fn schedule(&mut self, stage: Stage, at: Instant) {
        self.stage = stage;
        self.deadline = Some(at);
    }

    fn step(&mut self, at: Instant) -> Option<IntroSignal> {
        match self.stage {
            Stage::Pending => {
                self.transcript.push(TranscriptLine::Boot(BOOT_MESSAGES[0]));
                self.schedule(Stage::Booting { next: 1 }, at + BOOT_LINE_DELAY);
            }
            Stage::Booting { next } if next < BOOT_MESSAGES.len() => {
                self.transcript.push(TranscriptLine::Boot(BOOT_MESSAGES[next]));
                self.schedule(Stage::Booting { next: next + 1 }, at + BOOT_LINE_DELAY);
            }
            Stage::Booting { .. } => self.step_banner(0, at),
            Stage::Banner { next } => self.step_banner(next, at),
            Stage::Settling => {
                self.transcript.push(TranscriptLine::Spacer);
                self.start_command(at);
            }
            Stage::Prompting | Stage::Typing => self.type_next(at),
            Stage::Revealing => {
                if let Some(output) = SCRIPT[self.command].output {
                    self.transcript.push(TranscriptLine::Output(output));
                }
                self.after_output(at);
            }
            Stage::Advancing => {
                self.command += 1;
                self.start_command(at);
            }
            Stage::Closing => {
                debug!("Intro script finished, starting transition");
                self.progress = 0;
                self.schedule(Stage::Transition, at + PROGRESS_STEP_DELAY);
            }
            Stage::Transition if self.progress < 100 => {
                self.progress = (self.progress + PROGRESS_STEP).min(100);
                self.schedule(Stage::Transition, at + PROGRESS_STEP_DELAY);
            }
            Stage::Transition => self.schedule(Stage::Finishing, at + PROGRESS_SETTLE_DELAY),
            Stage::Finishing => {
                self.final_message = true;
                self.schedule(Stage::Holding, at + FINAL_HOLD);
            }
            Stage::Holding | Stage::Skipping => {
                self.stage = Stage::Done;
                self.deadline = None;
                return Some(IntroSignal::Activate);
            }
            Stage::AwaitingConfirm | Stage::Done => self.deadline = None,
        }
        None
    }

    fn step_banner(&mut self, next: usize, at: Instant) {
        match BANNER_LINES.get(next) {
            Some(line) => {
                self.transcript.push(TranscriptLine::Banner(line));
                self.schedule(Stage::Banner { next: next + 1 }, at + BANNER_LINE_DELAY);
            }
            None => self.schedule(Stage::Settling, at + SETTLE_DELAY),
        }
    }

    fn start_command(&mut self, at: Instant) {
        self.transcript.push(TranscriptLine::Command {
            command: SCRIPT[self.command],
            typed: 0,
            cursor: true,
        });
        self.schedule(Stage::Prompting, at + PROMPT_DELAY);
    }

    fn type_next(&mut self, at: Instant) {
        let total = SCRIPT[self.command].len();
        let Some(TranscriptLine::Command { typed, .. }) = self.transcript.last_mut() else {
            self.stage = Stage::AwaitingConfirm;
            self.deadline = None;
            return;
        };
        if *typed < total {
            *typed += 1;
            let delay = self.pace.next_delay();
            self.schedule(Stage::Typing, at + delay);
        } else {
            self.stage = Stage::AwaitingConfirm;
            self.deadline = None;
        }
    }

    fn after_output(&mut self, at: Instant) {
        if self.command + 1 >= SCRIPT.len() {
            self.schedule(Stage::Closing, at + CLOSE_DELAY);
        } else {
            self.schedule(Stage::Advancing, at + ADVANCE_DELAY);
        }
    }
}
