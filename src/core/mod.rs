//! # Core Application Logic
//!
//! Everything the portfolio *does*, independent of how it is drawn.
//! No terminal types live here, and no network calls are made here.
//!
//! ```text
//!                    ┌──────────────────────────────┐
//!                    │            CORE              │
//!                    │                              │
//!                    │  • IntroSequencer (boot)     │
//!                    │  • Router (cd / view state)  │
//!                    │  • App + update() (reducer)  │
//!                    │                              │
//!                    │  Time comes from a Clock.    │
//!                    └──────────────┬───────────────┘
//!                                   │
//!                ┌──────────────────┼──────────────────┐
//!                ▼                  ▼                  ▼
//!         ┌────────────┐     ┌────────────┐     ┌────────────┐
//!         │    TUI     │     │    API     │     │   Admin    │
//!         │  Adapter   │     │  (content) │     │    CLI     │
//!         │ (ratatui)  │     │ (reqwest)  │     │   (clap)   │
//!         └────────────┘     └────────────┘     └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`page`]: The fixed set of top-level pages and their virtual paths
//! - [`view`]: `ViewState` (page + at most one overlay) and which views it shows
//! - [`command`]: The `cd` grammar as an ordered rule table
//! - [`history`]: Bounded, newest-first command history with Up/Down recall
//! - [`suggest`]: Cycling command suggestions, ghost text, Tab-accept
//! - [`router`]: The `Router`: owns view state and executes commands
//! - [`intro`]: The scripted boot animation that hands off to the router
//! - [`clock`]: Injectable time source and the interval timer
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: TOML config file and override resolution

pub mod action;
pub mod clock;
pub mod command;
pub mod config;
pub mod history;
pub mod intro;
pub mod page;
pub mod router;
pub mod state;
pub mod suggest;
pub mod view;
