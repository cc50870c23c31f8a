//! # TUI Components
//!
//! Every piece of the screen is a component in this directory.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built fresh each frame from values copied or borrowed out of `App`:
//! - `PathBar`: virtual path, content origin, notices
//! - `Prompt`: the `user@host:path$` line with ghost text
//! - `HistoryPanel`: collapsible command history
//! - `NavBar`: page tabs for navbar mode
//! - `IntroView`: the boot sequence
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `PageView`: scrollable page body. Its `PageViewState` lives in
//!   `TuiState` and implements `EventHandler`, turning Up/Down/Enter into
//!   card selection and core `Action`s.
//!
//! ## Props-Based Data Flow
//!
//! Components never reach into `App` themselves. `ui::draw_ui` decides what
//! each one receives, which keeps every component testable against a
//! `TestBackend` with hand-built props.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── path_bar.rs
//! ├── prompt.rs
//! ├── history_panel.rs
//! ├── nav_bar.rs
//! ├── intro_view.rs
//! └── page_view/       (state, scrolling, section builders)
//! ```

mod history_panel;
mod intro_view;
mod nav_bar;
mod page_view;
mod path_bar;
mod prompt;

pub use history_panel::HistoryPanel;
pub use intro_view::IntroView;
pub use nav_bar::{NAV_BAR_HEIGHT, NavBar, page_for_digit};
pub use page_view::{PageView, PageViewState};
pub use path_bar::PathBar;
pub use prompt::{PROMPT_HEIGHT, Prompt};
